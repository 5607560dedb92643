//! Model loader seam
//!
//! Asset loading and caching live outside this system: the loader is an
//! opaque collaborator that resolves a model path to a renderable scene
//! graph. The trait also carries a preload hint so catalogs can warm the
//! loader ahead of first use.

use crate::models::ModelCatalog;

/// Load-by-path collaborator returning a renderable scene graph
pub trait ModelLoader {
    /// Renderable scene graph type produced by the loader
    type Scene;
    type Error;

    fn load(&mut self, path: &str) -> Result<Self::Scene, Self::Error>;

    /// Hint that a path will be loaded soon; default is a no-op
    fn preload(&mut self, _path: &str) {}
}

/// Issue preload hints for every model in the catalog
pub fn preload_catalog<L: ModelLoader>(catalog: &ModelCatalog, loader: &mut L) {
    for spec in catalog.models() {
        loader.preload(&spec.path);
    }
}
