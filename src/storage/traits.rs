use std::sync::Arc;

use crate::types::{CatalogEntry, NewCatalogEntry};

use super::StoreError;

pub trait CatalogStore {
    /// Drops the entry table and creates it empty.
    fn recreate_schema(&self) -> Result<(), StoreError>;

    /// Inserts the whole batch or nothing. Returned entries follow input order.
    fn insert_many(&self, entries: &[NewCatalogEntry]) -> Result<Vec<CatalogEntry>, StoreError>;

    fn insert_one(&self, entry: &NewCatalogEntry) -> Result<CatalogEntry, StoreError>;

    /// Every stored entry, ordered by `id`.
    fn find_all(&self) -> Result<Vec<CatalogEntry>, StoreError>;
}

impl<T: CatalogStore + ?Sized> CatalogStore for Arc<T> {
    fn recreate_schema(&self) -> Result<(), StoreError> {
        (**self).recreate_schema()
    }

    fn insert_many(&self, entries: &[NewCatalogEntry]) -> Result<Vec<CatalogEntry>, StoreError> {
        (**self).insert_many(entries)
    }

    fn insert_one(&self, entry: &NewCatalogEntry) -> Result<CatalogEntry, StoreError> {
        (**self).insert_one(entry)
    }

    fn find_all(&self) -> Result<Vec<CatalogEntry>, StoreError> {
        (**self).find_all()
    }
}
