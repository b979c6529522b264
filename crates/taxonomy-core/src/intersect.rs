//! Set intersection over option lists, keyed by code.
//!
//! Names are ignored during intersection; they may legitimately differ in
//! casing or whitespace across sources for the same code, so the
//! first-seen name wins. Result ordering follows the first input, and
//! codes are unique within a category, so ties cannot arise.
//!
//! The cascade folds several independently filtered contexts together
//! through [`intersect_contexts`], which applies one uniform empty-skip
//! policy: a context with no applicable associations for the target
//! category is excluded from the fold, while a context that had
//! applicable associations but matched none participates and forces the
//! overall result to empty.

use taxonomy_model::{Association, Category, CategoryOption};

use crate::filter::{filter_by_association, has_category};

/// Pairwise intersection by code. Ordering follows `a`.
pub fn intersect(a: &[CategoryOption], b: &[CategoryOption]) -> Vec<CategoryOption> {
    a.iter()
        .filter(|left| b.iter().any(|right| right.code == left.code))
        .cloned()
        .collect()
}

/// N-ary strict intersection by code: any empty input forces an empty
/// result. Ordering follows the first input.
pub fn intersect_all(sets: &[&[CategoryOption]]) -> Vec<CategoryOption> {
    let Some((first, rest)) = sets.split_first() else {
        return Vec::new();
    };
    let mut common = first.to_vec();
    for set in rest {
        if common.is_empty() {
            return Vec::new();
        }
        common = intersect(&common, set);
    }
    common
}

/// One independently filtered context entering an intersection fold.
#[derive(Debug, Clone)]
pub struct FilterContext {
    /// Context label for diagnostics (e.g., "state", "board", "medium").
    pub label: &'static str,
    /// Candidates surviving this context's association filter.
    pub options: Vec<CategoryOption>,
    /// Whether the context carried any association for the target
    /// category. Inapplicable contexts are skipped by the fold.
    pub applicable: bool,
}

impl FilterContext {
    /// Filters `candidates` against one reference association list.
    pub fn from_reference(
        label: &'static str,
        category: Category,
        candidates: &[CategoryOption],
        reference: &[Association],
    ) -> Self {
        let applicable = has_category(reference, category);
        let options = if applicable {
            filter_by_association(category, candidates, reference)
        } else {
            Vec::new()
        };
        Self {
            label,
            options,
            applicable,
        }
    }
}

/// Folds filtered contexts into one consistent option set under the
/// uniform empty-skip policy. When every context is inapplicable there is
/// nothing to agree on and the result is empty.
pub fn intersect_contexts(contexts: &[FilterContext]) -> Vec<CategoryOption> {
    let applicable: Vec<&[CategoryOption]> = contexts
        .iter()
        .filter(|context| context.applicable)
        .map(|context| context.options.as_slice())
        .collect();
    intersect_all(&applicable)
}
