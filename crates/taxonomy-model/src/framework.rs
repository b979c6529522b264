use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::association::CategoryOption;
use crate::category::Category;

/// All taxonomy options of a framework, indexed by category.
///
/// Populated once per session from the framework backend payload and
/// frozen for the remainder of the session; the cascade only ever reads
/// from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Framework {
    /// Options by category.
    pub options: BTreeMap<Category, Vec<CategoryOption>>,
}

impl Framework {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option under the given category.
    pub fn add_option(&mut self, category: Category, option: CategoryOption) {
        self.options.entry(category).or_default().push(option);
    }

    /// Returns the options tagged with the given category, in load order.
    pub fn options_in(&self, category: Category) -> &[CategoryOption] {
        self.options
            .get(&category)
            .map_or(&[], |options| options.as_slice())
    }

    /// Total option count across all categories.
    pub fn len(&self) -> usize {
        self.options.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.options.values().all(Vec::is_empty)
    }
}
