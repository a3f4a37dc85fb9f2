//! Document-to-scene build: dispatch context, loader, and the built scene.

pub(crate) mod context;
pub(crate) mod loader;
pub(crate) mod scene;
