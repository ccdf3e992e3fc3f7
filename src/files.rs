//! File-level outlining: scanning project trees and batch extraction.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{OutlineError, Result};
use crate::outline::{extract_outline, Dialect, OutlineEntry};

/// Outline of one file on disk
#[derive(Debug, Clone, Serialize)]
pub struct FileOutline {
    pub path: PathBuf,
    pub dialect: Dialect,
    pub entries: Vec<OutlineEntry>,
}

// Directories never worth outlining, even when not gitignored
const IGNORED_DIRS: &[&str] = &["node_modules", "dist", "build", "out", "coverage", ".git"];

/// Collect outlinable source files under `root`, sorted by path.
///
/// A file path is returned as is when its extension maps to a dialect.
pub fn collect_sources(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return match Dialect::from_path(root) {
            Some(_) => vec![root.to_path_buf()],
            None => Vec::new(),
        };
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(true)
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
            !(is_dir && IGNORED_DIRS.contains(&name.as_ref()))
        })
        .build();

    let mut sources = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().map_or(false, |ft| ft.is_file())
                    && Dialect::from_path(path).is_some()
                {
                    sources.push(path.to_path_buf());
                }
            }
            Err(err) => tracing::warn!("Error walking path: {}", err),
        }
    }

    sources.sort();
    tracing::debug!(root = %root.display(), files = sources.len(), "collected sources");
    sources
}

/// Read and outline a single file, picking the dialect from its extension
pub fn outline_file(path: &Path) -> Result<FileOutline> {
    let dialect = Dialect::from_path(path).ok_or_else(|| OutlineError::UnsupportedFile {
        path: path.to_path_buf(),
    })?;
    outline_file_as(path, dialect)
}

/// Read and outline a single file with an explicit dialect
pub fn outline_file_as(path: &Path, dialect: Dialect) -> Result<FileOutline> {
    let content = std::fs::read_to_string(path).map_err(|source| OutlineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = extract_outline(&content, dialect)?;
    Ok(FileOutline {
        path: path.to_path_buf(),
        dialect,
        entries,
    })
}

/// Batch outline multiple files in parallel, keeping input order.
///
/// `dialect` forces one dialect for every file; otherwise each file's
/// extension decides. One failing file never aborts the batch.
pub fn outline_files(
    paths: &[PathBuf],
    dialect: Option<Dialect>,
) -> Vec<(PathBuf, Result<FileOutline>)> {
    paths
        .par_iter()
        .map(|path| {
            let result = match dialect {
                Some(dialect) => outline_file_as(path, dialect),
                None => outline_file(path),
            };
            if let Err(err) = &result {
                tracing::warn!(path = %path.display(), "outline failed: {}", err);
            }
            (path.clone(), result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // Default temp names start with a dot, which the walker treats as hidden
    fn tempdir() -> TempDir {
        tempfile::Builder::new().prefix("outline-").tempdir().unwrap()
    }

    fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_collect_sources_filters_and_sorts() {
        let dir = tempdir();
        write(dir.path(), "src/b.ts", "function b() {}");
        write(dir.path(), "src/a.js", "function a() {}");
        write(dir.path(), "README.md", "# readme");
        write(dir.path(), "node_modules/dep/index.js", "function dep() {}");
        write(dir.path(), "dist/bundle.js", "function bundle() {}");

        let sources = collect_sources(dir.path());
        let relative: Vec<_> = sources
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![PathBuf::from("src/a.js"), PathBuf::from("src/b.ts")]
        );
    }

    #[test]
    fn test_collect_single_file() {
        let dir = tempdir();
        let js = write(dir.path(), "main.js", "");
        let txt = write(dir.path(), "notes.txt", "");
        assert_eq!(collect_sources(&js), vec![js.clone()]);
        assert!(collect_sources(&txt).is_empty());
    }

    #[test]
    fn test_outline_file() {
        let dir = tempdir();
        let path = write(dir.path(), "app.ts", "function start(port: number = 80) {}\n");

        let outline = outline_file(&path).unwrap();
        assert_eq!(outline.dialect, Dialect::TypeScript);
        assert_eq!(outline.entries.len(), 1);
        assert_eq!(outline.entries[0].name, "start");
        assert_eq!(outline.entries[0].args, vec!["port=80"]);
    }

    #[test]
    fn test_outline_file_errors() {
        let dir = tempdir();
        let unsupported = write(dir.path(), "style.css", "a {}");
        assert!(matches!(
            outline_file(&unsupported),
            Err(OutlineError::UnsupportedFile { .. })
        ));

        let missing = dir.path().join("missing.js");
        assert!(matches!(outline_file(&missing), Err(OutlineError::Io { .. })));
    }

    #[test]
    fn test_outline_files_keeps_order_and_failures() {
        let dir = tempdir();
        let paths = vec![
            write(dir.path(), "one.js", "function one() {}"),
            dir.path().join("gone.js"),
            write(dir.path(), "three.js", "function three() {}"),
        ];

        let results = outline_files(&paths, None);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, paths[0]);
        assert_eq!(results[0].1.as_ref().unwrap().entries[0].name, "one");
        assert!(results[1].1.is_err());
        assert_eq!(results[2].1.as_ref().unwrap().entries[0].name, "three");
    }

    #[test]
    fn test_forced_dialect() {
        let dir = tempdir();
        let path = write(dir.path(), "script.txt", "const f = (a: string) => a;");
        let results = outline_files(&[path], Some(Dialect::TypeScript));
        let outline = results[0].1.as_ref().unwrap();
        assert_eq!(outline.dialect, Dialect::TypeScript);
        assert_eq!(outline.entries[0].name, "f");
        assert_eq!(outline.entries[0].args, vec!["a"]);
    }
}
