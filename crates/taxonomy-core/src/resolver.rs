//! Category option resolution.
//!
//! Pure lookups over a frozen [`Framework`]; safe to call repeatedly as
//! upstream selections change.

use taxonomy_model::{Category, CategoryOption, Framework};

/// Returns all options tagged with the given category, each carrying its
/// own association list unmodified.
pub fn options_by_category(framework: &Framework, category: Category) -> &[CategoryOption] {
    framework.options_in(category)
}

/// Label-based variant for boundary callers holding a wire label.
///
/// Unknown labels yield an empty result, not an error; the surrounding
/// UI tolerates absent categories.
pub fn options_by_label<'a>(framework: &'a Framework, label: &str) -> &'a [CategoryOption] {
    match Category::from_label(label) {
        Some(category) => framework.options_in(category),
        None => &[],
    }
}
