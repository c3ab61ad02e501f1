//! Zoo directory index

use super::filename::{ZooFileKind, ZooFileName};
use crate::core::ZooError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, span, Level};

/// Extension of diagram sources the statistics pipeline reads
pub const YUML_EXTENSION: &str = "yuml";

/// One file in a zoo directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZooEntry {
    pub file_name: String,
    pub file_path: PathBuf,
    /// `None` when the name does not follow the zoo convention
    pub meta: Option<ZooFileName>,
}

impl ZooEntry {
    pub fn new(file_name: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        let file_name = file_name.into();
        let meta = ZooFileName::parse(&file_name);
        Self {
            file_name,
            file_path: file_path.into(),
            meta,
        }
    }

    /// Model name if this entry is a whole-model `.yuml` source
    pub fn yuml_model(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .filter(|meta| meta.kind == ZooFileKind::Full && meta.extension == YUML_EXTENSION)
            .map(|meta| meta.model.as_str())
    }
}

/// Files of a zoo directory with their parsed name metadata
#[derive(Debug, Clone, Default)]
pub struct ZooIndex {
    entries: Vec<ZooEntry>,
}

impl ZooIndex {
    /// Index the regular files directly inside `dir`, sorted by file name
    pub fn scan(dir: impl AsRef<Path>) -> Result<Self, ZooError> {
        let dir = dir.as_ref();
        let scan_span = span!(Level::INFO, "scan_zoo", dir = %dir.display());
        let _enter = scan_span.enter();

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(dir)? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }
            let file_name = dir_entry.file_name().to_string_lossy().into_owned();
            debug!(%file_name, "Indexed zoo file");
            entries.push(ZooEntry::new(file_name, dir_entry.path()));
        }

        let index = Self::from_entries(entries);
        info!(
            files = index.len(),
            models = index.yuml_models().count(),
            "Scanned zoo directory"
        );
        Ok(index)
    }

    /// Build an index from already known entries
    pub fn from_entries(mut entries: Vec<ZooEntry>) -> Self {
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Self { entries }
    }

    pub fn entries(&self) -> &[ZooEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whole-model `.yuml` sources as `(model, path)`, in index order
    pub fn yuml_models(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.yuml_model().map(|model| (model, entry.file_path.as_path())))
    }

    /// Path of a model's `.yuml` source; the first match wins
    pub fn path_for(&self, model: &str) -> Result<&Path, ZooError> {
        self.yuml_models()
            .find(|(name, _)| *name == model)
            .map(|(_, path)| path)
            .ok_or_else(|| ZooError::model_not_found(model))
    }

    /// Fragment files cut from `model`, any extension
    pub fn fragments_of<'a>(&'a self, model: &'a str) -> impl Iterator<Item = &'a ZooEntry> {
        self.entries.iter().filter(move |entry| {
            entry.meta.as_ref().is_some_and(|meta| {
                meta.model == model && matches!(meta.kind, ZooFileKind::Fragment { .. })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn index_of(names: &[&str]) -> ZooIndex {
        ZooIndex::from_entries(
            names
                .iter()
                .map(|name| ZooEntry::new(*name, format!("zoo/{}", name)))
                .collect(),
        )
    }

    #[test]
    fn test_yuml_models_only_full_yuml() {
        let index = index_of(&["Make.png", "Make.yuml", "Make_class0.yuml", "Ant.yuml", "notes"]);
        let models: Vec<_> = index.yuml_models().map(|(model, _)| model).collect();
        assert_eq!(models, vec!["Ant", "Make"]);
    }

    #[test]
    fn test_path_for() {
        let index = index_of(&["Make.yuml"]);
        assert_eq!(index.path_for("Make").unwrap(), Path::new("zoo/Make.yuml"));
        let err = index.path_for("Missing").unwrap_err();
        assert!(matches!(err, ZooError::ModelNotFound { ref model } if model == "Missing"));
    }

    #[test]
    fn test_uppercase_extension_counts_as_yuml() {
        let index = index_of(&["Make.YUML"]);
        assert!(index.path_for("Make").is_ok());
    }

    #[test]
    fn test_fragments_of() {
        let index = index_of(&["Make.yuml", "Make_class0.png", "Make_rel1.png", "Ant_rel0.png"]);
        let names: Vec<_> = index
            .fragments_of("Make")
            .map(|entry| entry.file_name.as_str())
            .collect();
        assert_eq!(names, vec!["Make_class0.png", "Make_rel1.png"]);
    }

    #[test]
    fn test_scan_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("B.yuml"), "[A]->[B]").unwrap();
        fs::write(dir.path().join("A.yuml"), "[A]").unwrap();
        fs::write(dir.path().join("A_class0.png"), "").unwrap();
        fs::create_dir(dir.path().join("nested.yuml")).unwrap();

        let index = ZooIndex::scan(dir.path()).unwrap();
        assert_eq!(index.len(), 3);
        let names: Vec<_> = index.entries().iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["A.yuml", "A_class0.png", "B.yuml"]);
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempdir().unwrap();
        let result = ZooIndex::scan(dir.path().join("absent"));
        assert!(matches!(result, Err(ZooError::Io { .. })));
    }
}
