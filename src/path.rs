use std::path::{Path, PathBuf};

use dirs_next as dirs;
use globset::GlobSet;
use walkdir::WalkDir;

/// Replace the home directory prefix with `~` to make output easier to read.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        let mut display = PathBuf::from("~");
        display.push(stripped);
        return display.display().to_string();
    }

    path.display().to_string()
}

pub fn resolve_roots(explicit: &[PathBuf]) -> Vec<PathBuf> {
    if explicit.is_empty() {
        vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
    } else {
        explicit.to_vec()
    }
}

pub fn is_excluded(path: &Path, exclude: Option<&GlobSet>) -> bool {
    if let Some(set) = exclude {
        let candidate = if path.is_absolute() {
            path.to_string_lossy().to_string()
        } else {
            match std::env::current_dir() {
                Ok(cwd) => {
                    let joined = cwd.join(path);
                    joined.to_string_lossy().to_string()
                }
                Err(_) => path.to_string_lossy().to_string(),
            }
        };
        set.is_match(&candidate)
    } else {
        false
    }
}

/// Expand `roots` into the files to inspect.
///
/// A file root is returned as given, even when it does not exist, so the
/// caller can report it. Directory roots contribute their direct files, or
/// every nested file when `recursive` is set.
pub fn collect_files(
    roots: &[PathBuf],
    recursive: bool,
    exclude: Option<&GlobSet>,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in roots {
        if !root.is_dir() {
            if !is_excluded(root, exclude) {
                files.push(root.clone());
            }
            continue;
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut walker = WalkDir::new(root).max_depth(max_depth).sort_by_file_name().into_iter();
        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Skipping {:?}: {}", err.path(), err);
                    continue;
                }
            };

            let entry_path = entry.path();
            if is_excluded(entry_path, exclude) {
                if entry.file_type().is_dir() {
                    walker.skip_current_dir();
                }
                continue;
            }

            if entry.file_type().is_file() {
                files.push(entry_path.to_path_buf());
            }
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.log"), "a").unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("nested/c.txt"), "c").unwrap();
        fs::write(dir.path().join("nested/deeper/d.txt"), "d").unwrap();
        dir
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn lists_direct_files_by_default() {
        let dir = tree();
        let files = collect_files(&[dir.path().to_path_buf()], false, None);
        assert_eq!(names(&files, dir.path()), vec!["a.log", "b.txt"]);
    }

    #[test]
    fn recursive_walk_prunes_excluded_entries() {
        let dir = tree();
        let mut builder = globset::GlobSetBuilder::new();
        builder.add(globset::Glob::new("**/*.log").unwrap());
        builder.add(globset::Glob::new("**/deeper").unwrap());
        let exclude = builder.build().unwrap();

        let files = collect_files(&[dir.path().to_path_buf()], true, Some(&exclude));
        assert_eq!(names(&files, dir.path()), vec!["b.txt", "nested/c.txt"]);
    }

    #[test]
    fn file_roots_pass_through() {
        let dir = tree();
        let missing = dir.path().join("missing.bin");
        let file = dir.path().join("b.txt");
        let files = collect_files(&[file.clone(), missing.clone()], false, None);
        assert_eq!(files, vec![file, missing]);
    }

    #[test]
    fn empty_roots_resolve_to_current_dir() {
        let roots = resolve_roots(&[]);
        assert_eq!(roots.len(), 1);
        assert_eq!(resolve_roots(&[PathBuf::from("x")]), vec![PathBuf::from("x")]);
    }
}
