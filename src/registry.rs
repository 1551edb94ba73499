//! Ordered, immutable list of page identifiers.
//!
//! The order defines both the navigation sequence and each page's offset in
//! the scroll strip, so it never changes after construction.

use std::collections::HashSet;
use std::fmt;

use crate::error::{AppError, AppResult};

/// Stable identifier of one page. Doubles as the page's anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRegistry {
    ids: Vec<PageId>,
}

impl PageRegistry {
    pub fn new<I>(ids: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = PageId>,
    {
        let ids: Vec<PageId> = ids.into_iter().collect();
        if ids.is_empty() {
            return Err(AppError::invalid_argument(
                "page registry needs at least one page",
            ));
        }

        let mut seen = HashSet::with_capacity(ids.len());
        for id in &ids {
            if id.as_str().is_empty() {
                return Err(AppError::invalid_argument("page id must not be empty"));
            }
            if !seen.insert(id.as_str()) {
                return Err(AppError::invalid_argument(format!(
                    "duplicate page id `{id}`"
                )));
            }
        }

        Ok(Self { ids })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false; construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.ids.len() - 1
    }

    /// Panics when `index` is out of range; callers hold indices that the
    /// controller already keeps within `0..len()`.
    pub fn id_at(&self, index: usize) -> &PageId {
        &self.ids[index]
    }

    pub fn position(&self, id: &PageId) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }
}
