use derive_builder::Builder;
use hashbrown::HashSet;
use std::path::PathBuf;

/// Directory names whose subtrees are never traversed.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] =
    &["node_modules", "dist", ".git", "__pycache__", "yarn.lock"];

/// File extensions eligible for counting, leading `.` included.
pub const DEFAULT_INCLUDE_EXTS: &[&str] = &[
    ".js", ".ts", ".py", ".html", ".css", ".java", ".ejs", ".prisma", ".json",
];

fn to_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    pub root: PathBuf,
    #[builder(default = "to_set(DEFAULT_EXCLUDE_DIRS)")]
    pub exclude_dirs: HashSet<String>,
    #[builder(default = "to_set(DEFAULT_INCLUDE_EXTS)")]
    pub include_exts: HashSet<String>,
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(exts) = &self.include_exts
            && let Some(bad) = exts.iter().find(|e| !e.starts_with('.'))
        {
            return Err(format!("extension '{bad}' must start with '.'"));
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Config for `root` with the fixed exclusion and inclusion sets.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude_dirs: to_set(DEFAULT_EXCLUDE_DIRS),
            include_exts: to_set(DEFAULT_INCLUDE_EXTS),
        }
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.contains(name)
    }

    pub fn is_included_ext(&self, ext: &str) -> bool {
        self.include_exts.contains(ext)
    }
}
