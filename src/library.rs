//! The directory of source images.

use crate::error::MemeError;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ImageLibrary {
    dir: PathBuf,
    extension: String,
}

impl ImageLibrary {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Names of the images with the library extension, sorted, without the
    /// directory prefix or the extension.
    pub fn list(&self) -> anyhow::Result<Vec<String>> {
        let mut names: Vec<String> = self
            .files()?
            .into_iter()
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension.as_str()))
            })
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .collect();

        names.sort();
        Ok(names)
    }

    /// Finds the first file, in name order, whose name starts with `prefix`.
    pub fn find(&self, prefix: &str) -> anyhow::Result<PathBuf> {
        let found = self
            .files()?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .is_some_and(|name| name.to_string_lossy().starts_with(prefix))
            })
            .min();

        match found {
            Some(path) => {
                log::debug!("Meme '{prefix}' resolved to {}", path.display());
                Ok(path)
            }
            None => Err(MemeError::SourceNotFound {
                prefix: prefix.to_string(),
                dir: self.dir.clone(),
            }
            .into()),
        }
    }

    fn files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read image directory: {}", self.dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("Failed to read image directory: {}", self.dir.display())
            })?;
            let path = entry.path();
            if path.is_file() && !is_hidden(&path) {
                files.push(path);
            }
        }
        Ok(files)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}
