use crate::config::ScanConfig;
use ignore::{DirEntry, WalkBuilder};
use log::{debug, warn};
use std::path::PathBuf;

/// Extension of a file name including the leading `.`.
///
/// Leading dots of the name are not separators, so `.bashrc` has no extension
/// while `archive.tar.py` yields `.py`.
pub fn dotted_extension(file_name: &str) -> Option<&str> {
    let body = file_name.trim_start_matches('.');
    body.rfind('.').map(|i| &body[i..])
}

/// Recursive walk over `config.root`, yielding every candidate file.
///
/// Subdirectories named in the exclusion set are pruned before descent; the root
/// itself is always walked. Files are filtered by extension before they are
/// returned, so non-matching files are never opened. Walk errors are logged and
/// skipped.
pub fn collect_files(config: &ScanConfig) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(&config.root);

    builder
        .standard_filters(false)
        .follow_links(false)
        .threads(1)
        .sort_by_file_name(|a, b| a.cmp(b));

    let prune = config.clone();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        if prune.is_excluded_dir(&name) {
            debug!("pruned {}", entry.path().display());
            return false;
        }
        true
    });

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                warn!("walk error: {e}");
                continue;
            }
        };
        if !is_file_like(&entry) {
            continue;
        }

        let included = dotted_extension(&entry.file_name().to_string_lossy())
            .is_some_and(|ext| config.is_included_ext(ext));
        if included {
            files.push(entry.into_path());
        } else {
            debug!("skipped {}", entry.path().display());
        }
    }
    files
}

/// Regular files, and symlinks that resolve to a regular file or dangle.
///
/// Dangling links are kept so the failed open is reported for them.
fn is_file_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => {
            entry.depth() > 0 && std::fs::metadata(entry.path()).map_or(true, |m| m.is_file())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &std::path::Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x\n").unwrap();
    }

    fn names(files: &[PathBuf], root: &std::path::Path) -> Vec<String> {
        files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn extension_rules() {
        assert_eq!(dotted_extension("a.py"), Some(".py"));
        assert_eq!(dotted_extension("archive.tar.py"), Some(".py"));
        assert_eq!(dotted_extension(".bashrc"), None);
        assert_eq!(dotted_extension("..py"), None);
        assert_eq!(dotted_extension(".eslintrc.json"), Some(".json"));
        assert_eq!(dotted_extension("Makefile"), None);
        assert_eq!(dotted_extension("trailing."), Some("."));
    }

    #[test]
    fn filters_by_extension_case_sensitively() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.py");
        touch(dir.path(), "b.PY");
        touch(dir.path(), "c.rs");
        touch(dir.path(), "d.ts");

        let files = collect_files(&ScanConfig::new(dir.path()));
        assert_eq!(names(&files, dir.path()), vec!["a.py", "d.ts"]);
    }

    #[test]
    fn prunes_excluded_dirs_transitively() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/app.js");
        touch(dir.path(), "node_modules/pkg/index.js");
        touch(dir.path(), "src/node_modules/deep/x.js");
        touch(dir.path(), ".git/hooks/pre-commit.py");
        touch(dir.path(), "lib/__pycache__/m.py");

        let files = collect_files(&ScanConfig::new(dir.path()));
        assert_eq!(names(&files, dir.path()), vec!["src/app.js"]);
    }

    #[test]
    fn excluded_name_only_prunes_directories() {
        let dir = TempDir::new().unwrap();
        // ファイル名が除外セットと一致してもディレクトリでなければ剪定されない
        touch(dir.path(), "dist");
        touch(dir.path(), "build/dist.js");

        let files = collect_files(&ScanConfig::new(dir.path()));
        assert_eq!(names(&files, dir.path()), vec!["build/dist.js"]);
    }

    #[test]
    fn root_is_never_pruned() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("dist");
        touch(&root, "bundle.js");

        let files = collect_files(&ScanConfig::new(&root));
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn hidden_and_ignored_files_are_visited() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "ignored.py\n").unwrap();
        touch(dir.path(), "ignored.py");
        touch(dir.path(), ".hidden/config.json");

        let files = collect_files(&ScanConfig::new(dir.path()));
        assert_eq!(
            names(&files, dir.path()),
            vec![".hidden/config.json", "ignored.py"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn directory_symlinks_are_not_followed() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "real/a.py");
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let files = collect_files(&ScanConfig::new(dir.path()));
        assert_eq!(names(&files, dir.path()), vec!["real/a.py"]);
    }

    #[cfg(unix)]
    #[test]
    fn file_and_dangling_symlinks_pass_the_extension_filter() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "real.js");
        std::os::unix::fs::symlink(dir.path().join("real.js"), dir.path().join("alias.js"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("dangling.py"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("dangling.txt"))
            .unwrap();

        let files = collect_files(&ScanConfig::new(dir.path()));
        assert_eq!(
            names(&files, dir.path()),
            vec!["alias.js", "dangling.py", "real.js"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn fifos_are_skipped_directly_and_through_symlinks() {
        let dir = TempDir::new().unwrap();
        let fifo = dir.path().join("pipe.py");
        let status = std::process::Command::new("mkfifo").arg(&fifo).status().unwrap();
        assert!(status.success());
        std::os::unix::fs::symlink(&fifo, dir.path().join("pipe_link.py")).unwrap();
        touch(dir.path(), "plain.py");

        let files = collect_files(&ScanConfig::new(dir.path()));
        assert_eq!(names(&files, dir.path()), vec!["plain.py"]);
    }
}
