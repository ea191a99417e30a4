/*! Crawled corpus listing

Holds every `.json` file found under a root folder, at any depth.
!*/
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::Error;

pub struct Corpus {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl Corpus {
    /// Walk `root` recursively and collect `.json` files, sorted by path.
    pub fn new(root: &Path) -> Result<Self, Error> {
        let root_str = root
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid source folder: {:?}", root)))?;

        let pattern = format!("{}/**/*.json", glob::Pattern::escape(root_str));
        debug!("listing crawled files with {}", pattern);

        let mut files = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            warn!("no json file found in {:?}", root);
        }

        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    /// Get a reference to the corpus root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get a reference to the discovered files.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::Corpus;

    #[test]
    fn test_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("category_iran_x.json"), "[]").unwrap();
        fs::write(nested.join("category_canada_y.json"), "[]").unwrap();
        fs::write(nested.join("notes.txt"), "").unwrap();

        let c = Corpus::new(dir.path()).unwrap();
        let names: Vec<String> = c
            .files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names.len(), 2);
        assert!(names.contains(&"category_iran_x.json".to_string()));
        assert!(names.contains(&"category_canada_y.json".to_string()));
    }

    #[test]
    fn test_empty() {
        let dir = tempfile::tempdir().unwrap();
        let c = Corpus::new(dir.path()).unwrap();
        assert!(c.files().is_empty());
        assert_eq!(c.root(), dir.path());
    }
}
