//! @acp:module "Configuration"
//! @acp:summary "Output location for generated notes"
//! @acp:domain cli
//! @acp:layer config
//!
//! The generator takes no user configuration. The only thing resolved at
//! startup is where notes go: a `mechanics` directory next to the directory
//! that holds the executable.

use std::path::{Path, PathBuf};

/// Name of the directory notes are written into
pub const MECHANICS_DIR: &str = "mechanics";

/// Resolved generator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory note files are written into
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    /// Use an explicit output directory
    pub fn with_output_dir<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Resolve `<exe dir>/../mechanics` for the running executable.
    ///
    /// Falls back to `../mechanics` under the working directory when the
    /// executable path cannot be determined.
    pub fn from_executable() -> Self {
        let root = match std::env::current_exe() {
            Ok(exe) => project_root_for(&exe),
            Err(e) => {
                tracing::warn!("Could not locate executable, using working directory: {}", e);
                std::env::current_dir()
                    .map(|cwd| cwd.join(".."))
                    .unwrap_or_else(|_| PathBuf::from(".."))
            }
        };

        let config = Self::with_output_dir(root.join(MECHANICS_DIR));
        tracing::debug!("Output directory: {}", config.output_dir.display());
        config
    }

    /// Full path for a note file
    pub fn note_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from_executable()
    }
}

/// One level above the directory holding `exe`
fn project_root_for(exe: &Path) -> PathBuf {
    let exe_dir = exe
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    match exe_dir.parent() {
        Some(root) if !root.as_os_str().is_empty() => root.to_path_buf(),
        _ => exe_dir.join(".."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_parent_of_exe_dir() {
        let root = project_root_for(Path::new("/opt/lab/bin/generate-mechanic"));
        assert_eq!(root, PathBuf::from("/opt/lab"));
    }

    #[test]
    fn test_root_for_relative_exe() {
        let root = project_root_for(Path::new("generate-mechanic"));
        assert_eq!(root, PathBuf::from("./.."));
    }

    #[test]
    fn test_root_for_exe_in_filesystem_root() {
        let root = project_root_for(Path::new("/generate-mechanic"));
        assert_eq!(root, PathBuf::from("/.."));
    }

    #[test]
    fn test_note_path() {
        let config = GeneratorConfig::with_output_dir("/opt/lab/mechanics");
        assert_eq!(
            config.note_path("2024-03-05-x-go-note.md"),
            PathBuf::from("/opt/lab/mechanics/2024-03-05-x-go-note.md")
        );
    }

    #[test]
    fn test_from_executable_ends_in_mechanics() {
        let config = GeneratorConfig::from_executable();
        assert_eq!(config.output_dir.file_name().unwrap(), MECHANICS_DIR);
    }
}
