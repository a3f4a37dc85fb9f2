//! Resolve a node's resource name into a texture region or drawable.
//!
//! With atlases registered, names are turned into lookup keys (extension stripped, first path
//! segment dropped, optional `_N` index suffix) and searched in the atlases. Without atlases the
//! name is a file path relative to the document directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    assets::{
        atlas::AtlasSet,
        decode::load_texture,
        texture::{Drawable, NinePatch, Texture, TextureRegion},
    },
    document::model::{FileData, NodeDescription},
    foundation::{
        diag::{Diagnostic, DiagnosticSink, Severity},
        error::UiResult,
    },
};

/// Atlas key of a resource name: extension removed and, for nested paths, the first directory
/// segment dropped. Returns `None` for names without an extension or with an empty key.
pub fn atlas_lookup_key(name: &str) -> Option<String> {
    let dot = name.rfind('.')?;
    let stem = &name[..dot];
    let key = match stem.find('/') {
        Some(slash) => &stem[slash + 1..],
        None => stem,
    };
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

/// Split a trailing `_N` sequence index off a lookup key.
pub fn split_index_suffix(key: &str) -> Option<(&str, i32)> {
    let (base, suffix) = key.rsplit_once('_')?;
    suffix.parse::<i32>().ok().map(|index| (base, index))
}

/// Resource resolution for one build.
pub struct ResourceResolver {
    dir: PathBuf,
    atlases: AtlasSet,
    sink: Arc<dyn DiagnosticSink>,
    textures: HashMap<PathBuf, Arc<Texture>>,
}

impl ResourceResolver {
    /// Resolver rooted at `dir` (the document directory).
    pub fn new(dir: impl Into<PathBuf>, atlases: AtlasSet, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            dir: dir.into(),
            atlases,
            sink,
            textures: HashMap::new(),
        }
    }

    /// Directory loose resources resolve against.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Swap the resolution directory, returning the previous one.
    pub(crate) fn replace_dir(&mut self, dir: PathBuf) -> PathBuf {
        std::mem::replace(&mut self.dir, dir)
    }

    /// Registered atlases.
    pub fn atlases(&self) -> &AtlasSet {
        &self.atlases
    }

    /// Path of a loose resource relative to the current directory.
    pub fn resource_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Resolve `name` into a region, applying the node's flip flags.
    ///
    /// A missing atlas entry is reported and yields `Ok(None)`. Without atlases, failing to read
    /// or decode the image file is fatal.
    pub fn resolve_region(
        &mut self,
        node: &NodeDescription,
        name: &str,
    ) -> UiResult<Option<Arc<TextureRegion>>> {
        if name.is_empty() {
            return Ok(None);
        }

        if self.atlases.is_empty() {
            let texture = self.load_file(name)?;
            let mut region = TextureRegion::whole(texture);
            region.flip(node.flip_x, node.flip_y);
            return Ok(Some(Arc::new(region)));
        }

        let key = match atlas_lookup_key(name) {
            Some(key) => key,
            None => {
                self.report(
                    node,
                    Severity::Error,
                    format!("malformed resource name '{name}'"),
                );
                name.to_string()
            }
        };

        let found = match split_index_suffix(&key) {
            Some((base, index)) => self.atlases.find_region_indexed(base, index),
            None => self.atlases.find_region(&key),
        };
        let Some(region) = found else {
            self.report(
                node,
                Severity::Debug,
                format!("texture not found: '{name}' (key '{key}')"),
            );
            return Ok(None);
        };

        if node.flip_x || node.flip_y {
            // Atlas regions are shared; mirror a private copy.
            let mut owned = (*region).clone();
            owned.flip(node.flip_x, node.flip_y);
            Ok(Some(Arc::new(owned)))
        } else {
            Ok(Some(region))
        }
    }

    /// Resolve `name` into a drawable, wrapping it in a nine-patch when the node enables it.
    pub fn resolve_drawable(
        &mut self,
        node: &NodeDescription,
        name: &str,
    ) -> UiResult<Option<Drawable>> {
        let Some(region) = self.resolve_region(node, name)? else {
            return Ok(None);
        };
        if !node.scale9_enable {
            return Ok(Some(Drawable::Region(region)));
        }
        Ok(Some(Drawable::NinePatch(NinePatch::from_cap_insets(
            region,
            node.scale9_origin_x,
            node.scale9_origin_y,
            node.scale9_width,
            node.scale9_height,
            node.color(),
        ))))
    }

    /// [`ResourceResolver::resolve_drawable`] for an optional file reference.
    pub fn resolve_file_drawable(
        &mut self,
        node: &NodeDescription,
        file: Option<&FileData>,
    ) -> UiResult<Option<Drawable>> {
        match file {
            Some(f) if !f.path.is_empty() => self.resolve_drawable(node, &f.path),
            _ => Ok(None),
        }
    }

    /// Plain region (no nine-patch) for an optional file reference.
    pub fn resolve_file_region(
        &mut self,
        node: &NodeDescription,
        file: Option<&FileData>,
    ) -> UiResult<Option<Arc<TextureRegion>>> {
        match file {
            Some(f) if !f.path.is_empty() => self.resolve_region(node, &f.path),
            _ => Ok(None),
        }
    }

    fn load_file(&mut self, name: &str) -> UiResult<Arc<Texture>> {
        let path = self.dir.join(name);
        if let Some(tex) = self.textures.get(&path) {
            return Ok(tex.clone());
        }
        let tex = Arc::new(load_texture(&path)?);
        tracing::trace!(path = %path.display(), w = tex.width, h = tex.height, "loaded image");
        self.textures.insert(path, tex.clone());
        Ok(tex)
    }

    fn report(&self, node: &NodeDescription, severity: Severity, message: String) {
        self.sink
            .emit(Diagnostic::new(severity, message).for_node(&node.ctype, &node.name));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resolver.rs"]
mod tests;
