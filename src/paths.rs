//! Path resolution relative to the invocation directory.
//!
//! User-supplied paths are made absolute against the working directory the
//! tool was started in. Bundled resources (the default template) live under
//! a resource root that is decided once at startup.

use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// File name of the template shipped with the tool
pub const DEFAULT_TEMPLATE_NAME: &str = "template.docx";

/// Make `path` absolute by joining it onto `cwd` unless it already is.
///
/// No filesystem access happens here; missing files surface later in the
/// report builder.
pub fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) }
}

/// How the resource root was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLayout {
    /// Passed in via `--resource-dir` or `ALLURE_DOCX_RESOURCES`
    Explicit,
    /// Resources sit next to the installed executable
    Packaged,
    /// Running from a source checkout
    Source,
}

/// Directory holding bundled resources such as the default template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoot {
    dir: PathBuf,
    layout: ResourceLayout,
}

impl ResourceRoot {
    pub fn new(dir: PathBuf, layout: ResourceLayout) -> Self {
        Self { dir, layout }
    }

    /// Pick the resource root for this process.
    ///
    /// An explicit directory always wins (made absolute against `cwd`).
    /// Otherwise a template next to the executable means a packaged install,
    /// and anything else falls back to the crate's `resources/` directory.
    pub fn detect(explicit: Option<&Path>, cwd: &Path) -> Self {
        if let Some(dir) = explicit {
            let root = Self::new(resolve_path(cwd, dir), ResourceLayout::Explicit);
            debug!("Using explicit resource root {:?}", root.dir);
            return root;
        }

        let exe_dir = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf));
        let root = Self::from_layout(exe_dir.as_deref());
        debug!("Detected {:?} resource root {:?}", root.layout, root.dir);
        root
    }

    /// Choose between packaged and source layout given the executable's directory.
    fn from_layout(exe_dir: Option<&Path>) -> Self {
        if let Some(dir) = exe_dir
            && dir.join(DEFAULT_TEMPLATE_NAME).is_file()
        {
            return Self::new(dir.to_path_buf(), ResourceLayout::Packaged);
        }
        Self::new(source_resource_dir(), ResourceLayout::Source)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn layout(&self) -> ResourceLayout {
        self.layout
    }

    /// Location of the bundled default template
    pub fn default_template(&self) -> PathBuf {
        self.dir.join(DEFAULT_TEMPLATE_NAME)
    }

    /// Whether the default template is present under this root
    pub fn has_default_template(&self) -> bool {
        self.default_template().is_file()
    }
}

/// Resource directory of the source checkout this binary was built from
pub fn source_resource_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources")
}
