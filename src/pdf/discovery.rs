//! Converter discovery on the host.
//!
//! Lookups follow locate-on-PATH semantics. A missing tool is not an error
//! here, it only means the next tool in priority order gets a chance.

use super::types::ConversionTool;
use log::debug;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Finds executables by name.
pub trait ToolLocator {
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// Searches the directories of a PATH-style variable in order.
#[derive(Debug, Clone, Default)]
pub struct PathLocator {
    dirs: Vec<PathBuf>,
    extensions: Vec<OsString>,
}

impl PathLocator {
    /// Locator over the process's own `PATH`
    pub fn from_env() -> Self {
        Self::new(env::var_os("PATH"))
    }

    /// Locator over an explicit PATH-style search list
    pub fn new(search_path: Option<OsString>) -> Self {
        let dirs = search_path
            .map(|value| env::split_paths(&value).filter(|dir| !dir.as_os_str().is_empty()).collect())
            .unwrap_or_default();
        Self { dirs, extensions: executable_extensions() }
    }

    fn candidates(&self, dir: &Path, program: &str) -> Vec<PathBuf> {
        let mut candidates = vec![dir.join(program)];
        for ext in &self.extensions {
            let mut name = OsString::from(program);
            name.push(ext);
            candidates.push(dir.join(name));
        }
        candidates
    }
}

impl ToolLocator for PathLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.dirs.iter().flat_map(|dir| self.candidates(dir, program)).find(|candidate| is_executable(candidate))
    }
}

/// Find the highest-priority converter available through `locator`.
pub fn discover(locator: &dyn ToolLocator) -> Option<(ConversionTool, PathBuf)> {
    for tool in ConversionTool::PRIORITY {
        match locator.locate(tool.program_name()) {
            Some(path) => {
                debug!("Found {} at {:?}", tool, path);
                return Some((tool, path));
            }
            None => debug!("{} not found", tool),
        }
    }
    None
}

/// Extensions tried after the bare name (`PATHEXT` on Windows)
#[cfg(windows)]
fn executable_extensions() -> Vec<OsString> {
    let pathext = env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    pathext.split(';').filter(|ext| !ext.is_empty()).map(OsString::from).collect()
}

#[cfg(not(windows))]
fn executable_extensions() -> Vec<OsString> {
    Vec::new()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata().map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    /// Locator backed by a fixed table
    struct TableLocator(HashMap<&'static str, PathBuf>);

    impl ToolLocator for TableLocator {
        fn locate(&self, program: &str) -> Option<PathBuf> {
            self.0.get(program).cloned()
        }
    }

    #[test]
    fn test_discover_prefers_office_to_pdf() {
        let locator = TableLocator(HashMap::from([
            ("OfficeToPDF", PathBuf::from("/tools/OfficeToPDF")),
            ("soffice", PathBuf::from("/tools/soffice")),
        ]));

        let (tool, path) = discover(&locator).unwrap();
        assert_eq!(tool, ConversionTool::OfficeToPdf);
        assert_eq!(path, PathBuf::from("/tools/OfficeToPDF"));
    }

    #[test]
    fn test_discover_falls_back_to_soffice() {
        let locator = TableLocator(HashMap::from([("soffice", PathBuf::from("/usr/bin/soffice"))]));

        let (tool, _) = discover(&locator).unwrap();
        assert_eq!(tool, ConversionTool::Soffice);
    }

    #[test]
    fn test_discover_nothing() {
        assert!(discover(&TableLocator(HashMap::new())).is_none());
        assert!(discover(&PathLocator::new(None)).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_path_locator_finds_executables_in_order() {
        use std::os::unix::fs::PermissionsExt;

        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        for dir in [first.path(), second.path()] {
            let tool = dir.join("soffice");
            std::fs::write(&tool, "#!/bin/sh\n").unwrap();
            std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let search = env::join_paths([first.path(), second.path()]).unwrap();
        let locator = PathLocator::new(Some(search));

        assert_eq!(locator.locate("soffice"), Some(first.path().join("soffice")));
        assert_eq!(locator.locate("OfficeToPDF"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_path_locator_skips_non_executable_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("soffice"), "not a program").unwrap();
        std::fs::create_dir(dir.path().join("OfficeToPDF")).unwrap();

        let locator = PathLocator::new(Some(dir.path().as_os_str().to_owned()));
        assert_eq!(locator.locate("soffice"), None);
        assert_eq!(locator.locate("OfficeToPDF"), None);
    }
}
