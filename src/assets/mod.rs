//! Images, atlases, fonts, and the resolver turning authored names into drawables.

pub(crate) mod atlas;
pub(crate) mod decode;
pub(crate) mod fonts;
pub(crate) mod resolver;
pub(crate) mod texture;
