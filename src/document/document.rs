use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::document::model::{AnimationBlock, ExportDef, NodeDescription};
use crate::foundation::error::{UiError, UiResult};

/// A parsed editor export.
///
/// Immutable once parsed. The document remembers the directory it was read from; every resource
/// path inside it is resolved relative to that directory.
#[derive(Debug, Clone)]
pub struct Document {
    def: ExportDef,
    dir: PathBuf,
    source: Option<PathBuf>,
}

impl Document {
    /// Parse a document from a JSON reader. Resources resolve relative to the working directory
    /// until [`Document::with_dir`] says otherwise.
    pub fn from_reader<R: std::io::Read>(r: R) -> UiResult<Self> {
        let def: ExportDef = serde_json::from_reader(r)
            .map_err(|e| UiError::serde(format!("parse document JSON: {e}")))?;
        Ok(Self {
            def,
            dir: PathBuf::new(),
            source: None,
        })
    }

    /// Parse a document from an in-memory JSON string.
    pub fn from_json_str(json: &str) -> UiResult<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Parse a document from a JSON file on disk; its parent directory becomes the resource root.
    pub fn from_path(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            UiError::resource(format!("open document JSON '{}': {e}", path.display()))
        })?;
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let mut doc = Self::from_reader(BufReader::new(f))?.with_dir(dir);
        doc.source = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Build a document around an already constructed root node.
    pub fn from_root(root: NodeDescription, animation: AnimationBlock) -> Self {
        let mut def = ExportDef::default();
        def.content.content.object_data = Some(root);
        def.content.content.animation = animation;
        Self {
            def,
            dir: PathBuf::new(),
            source: None,
        }
    }

    /// Replace the resource root directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Directory resource paths are relative to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File the document was read from, when it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Root node, absent when the export has no `ObjectData`.
    pub fn root(&self) -> Option<&NodeDescription> {
        self.def.content.content.object_data.as_ref()
    }

    /// Root node, or a structural error naming what is missing.
    pub fn require_root(&self) -> UiResult<&NodeDescription> {
        self.root()
            .ok_or_else(|| UiError::document("document has no root node (Content.Content.ObjectData)"))
    }

    /// Animation block (empty when the export has none).
    pub fn animation(&self) -> &AnimationBlock {
        &self.def.content.content.animation
    }

    /// Total number of nodes under the root.
    pub fn node_count(&self) -> usize {
        self.root().map_or(0, NodeDescription::count_nodes)
    }
}

impl std::str::FromStr for Document {
    type Err = UiError;

    fn from_str(json: &str) -> UiResult<Self> {
        Self::from_json_str(json)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/document.rs"]
mod tests;
