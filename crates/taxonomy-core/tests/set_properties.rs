//! Property tests for the filter and intersection primitives.

use proptest::prelude::*;

use taxonomy_core::filter::filter_by_association;
use taxonomy_core::intersect::intersect;
use taxonomy_model::{Association, Category, CategoryOption};

/// Builds an option list from codes, deduplicating since codes are unique
/// within a category.
fn options_from(codes: &[String]) -> Vec<CategoryOption> {
    let mut seen = Vec::new();
    let mut options = Vec::new();
    for code in codes {
        if seen.contains(code) {
            continue;
        }
        seen.push(code.clone());
        options.push(CategoryOption::new(format!("Name {code}"), code.clone()));
    }
    options
}

fn sorted_codes(options: &[CategoryOption]) -> Vec<String> {
    let mut codes: Vec<String> = options.iter().map(|option| option.code.clone()).collect();
    codes.sort();
    codes
}

fn code_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-E]", 0..6)
}

proptest! {
    #[test]
    fn intersect_commutes_on_codes(a in code_list(), b in code_list()) {
        let a = options_from(&a);
        let b = options_from(&b);
        prop_assert_eq!(
            sorted_codes(&intersect(&a, &b)),
            sorted_codes(&intersect(&b, &a))
        );
    }

    #[test]
    fn intersect_is_idempotent_on_codes(a in code_list()) {
        let a = options_from(&a);
        prop_assert_eq!(intersect(&a, &a), a);
    }

    #[test]
    fn intersect_result_is_subset_of_both_inputs(a in code_list(), b in code_list()) {
        let a = options_from(&a);
        let b = options_from(&b);
        for option in intersect(&a, &b) {
            prop_assert!(a.iter().any(|left| left.code == option.code));
            prop_assert!(b.iter().any(|right| right.code == option.code));
        }
    }

    #[test]
    fn filter_returns_subset_of_candidates(
        candidates in code_list(),
        reference in code_list(),
    ) {
        let candidates = options_from(&candidates);
        let reference: Vec<Association> = reference
            .iter()
            .map(|code| Association::new(code.clone(), Category::Medium))
            .collect();
        let kept = filter_by_association(Category::Medium, &candidates, &reference);
        for option in &kept {
            prop_assert!(candidates.iter().any(|c| c.code == option.code));
        }
        prop_assert!(kept.len() <= candidates.len());
    }

    #[test]
    fn filter_never_matches_across_categories(
        candidates in code_list(),
        reference in code_list(),
    ) {
        let candidates = options_from(&candidates);
        let reference: Vec<Association> = reference
            .iter()
            .map(|code| Association::new(code.clone(), Category::GradeLevel))
            .collect();
        let kept = filter_by_association(Category::Medium, &candidates, &reference);
        prop_assert!(kept.is_empty());
    }
}
