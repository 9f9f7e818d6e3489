//! Collection Sources
//!
//! Describes one orderable server collection: where to read it, where to
//! write its order, how to turn a raw record into an [`OrderableItem`] and how
//! to sort it initially.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::auth::ADMIN_ROLE;
use crate::model::{ItemComparator, OrderableItem};

/// Mapping from one raw record to an item, or `None` to skip the record
pub type MapItem<R> = fn(R) -> Option<OrderableItem>;

pub struct CollectionSource<R> {
    /// Short name used in logs and notices
    pub name: String,
    pub fetch_url: String,
    pub patch_url: String,
    pub map_item: MapItem<R>,
    pub sort: Option<ItemComparator>,
    pub required_role: String,
}

impl<R: DeserializeOwned> CollectionSource<R> {
    pub fn new(
        name: impl Into<String>,
        fetch_url: impl Into<String>,
        patch_url: impl Into<String>,
        map_item: MapItem<R>,
    ) -> Self {
        Self {
            name: name.into(),
            fetch_url: fetch_url.into(),
            patch_url: patch_url.into(),
            map_item,
            sort: None,
            required_role: ADMIN_ROLE.to_string(),
        }
    }

    /// Apply `compare` after mapping instead of keeping server order
    pub fn with_sort(mut self, compare: ItemComparator) -> Self {
        self.sort = Some(compare);
        self
    }

    pub fn with_required_role(mut self, role: impl Into<String>) -> Self {
        self.required_role = role.into();
        self
    }
}

// Manual impls: `R` itself need not be Clone/Debug, only the fn pointer is stored.
impl<R> Clone for CollectionSource<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            fetch_url: self.fetch_url.clone(),
            patch_url: self.patch_url.clone(),
            map_item: self.map_item,
            sort: self.sort,
            required_role: self.required_role.clone(),
        }
    }
}

impl<R> fmt::Debug for CollectionSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionSource")
            .field("name", &self.name)
            .field("fetch_url", &self.fetch_url)
            .field("patch_url", &self.patch_url)
            .field("sorted", &self.sort.is_some())
            .field("required_role", &self.required_role)
            .finish()
    }
}
