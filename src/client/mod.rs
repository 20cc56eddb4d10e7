//! Fetch-and-render side of the catalog: requests the entry list once and
//! renders cards, an empty-state message, or a load-failure message.

mod render;
mod source;

use render::{render_entries, render_load_failed};
pub use render::Container;
pub use source::{CatalogSource, HttpCatalogSource};

/// One page lifecycle. `load` consumes the page, so the catalog is fetched
/// and rendered at most once.
pub struct CatalogPage<S: CatalogSource> {
    source: S,
}

impl<S: CatalogSource> CatalogPage<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn load(self, container: &mut Container) {
        match self.source.fetch_catalog().await {
            Ok(entries) => render_entries(container, &entries),
            Err(err) => {
                log::error!("Failed to load the cheese catalog: {}", err);
                render_load_failed(container);
            }
        }
    }
}
