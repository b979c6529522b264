//! Association filtering, the workhorse primitive of every cascade stage.

use taxonomy_model::{Association, Category, CategoryOption};

/// Keeps each candidate iff some reference association asserts its code
/// under the given category.
///
/// Matching is by exact code equality; a category mismatch excludes an
/// association from consideration even when codes collide across
/// categories. An empty result is a valid terminal state for a cascade
/// stage, never an error.
pub fn filter_by_association(
    category: Category,
    candidates: &[CategoryOption],
    reference: &[Association],
) -> Vec<CategoryOption> {
    candidates
        .iter()
        .filter(|candidate| {
            reference
                .iter()
                .any(|association| association.matches(category, &candidate.code))
        })
        .cloned()
        .collect()
}

/// Whether a reference context carries any association for a category at
/// all. Contexts without any are "not applicable" for that category and
/// are excluded from intersection folds.
pub fn has_category(reference: &[Association], category: Category) -> bool {
    reference
        .iter()
        .any(|association| association.category == category)
}
