//! Per-session association store.
//!
//! Holds the frozen inputs of one cascade session: the framework options
//! and the state- and board-level association lists. Built once from the
//! backend payloads, validated at this boundary, then only read. Explicit
//! context object by design; there is no ambient global copy.

use tracing::warn;

use taxonomy_model::raw::convert_associations;
use taxonomy_model::{Association, CategoryOption, Framework, RawAssociation, RawFramework};

/// The raw taxonomy graph for one page session.
#[derive(Debug, Clone, Default)]
pub struct AssociationStore {
    /// All framework options, indexed by category.
    pub framework: Framework,
    /// State-level association context.
    pub state_associations: Vec<Association>,
    /// Board-level association context.
    pub board_associations: Vec<Association>,
}

impl AssociationStore {
    /// Builds a store from already-validated inputs.
    pub fn new(
        framework: Framework,
        state_associations: Vec<Association>,
        board_associations: Vec<Association>,
    ) -> Self {
        Self {
            framework,
            state_associations,
            board_associations,
        }
    }

    /// Builds a store from raw backend payloads.
    ///
    /// Malformed records are excluded from the session rather than
    /// failing it; each exclusion is logged once for diagnostics.
    pub fn from_raw(
        framework: RawFramework,
        state_associations: Vec<RawAssociation>,
        board_associations: Vec<RawAssociation>,
    ) -> Self {
        let (framework, rejected) = framework.into_framework();
        log_rejected("framework", &rejected);
        let (state_associations, rejected) = convert_associations(state_associations);
        log_rejected("state", &rejected);
        let (board_associations, rejected) = convert_associations(board_associations);
        log_rejected("board", &rejected);
        Self {
            framework,
            state_associations,
            board_associations,
        }
    }
}

/// Returns the association list nested under the option with the given
/// code, or an empty list when the code is absent.
pub fn associations_of(options: &[CategoryOption], code: &str) -> Vec<Association> {
    options
        .iter()
        .find(|option| option.code == code)
        .map(|option| option.associations.clone())
        .unwrap_or_default()
}

fn log_rejected(source: &'static str, rejected: &[taxonomy_model::ModelError]) {
    for error in rejected {
        warn!(source, %error, "excluding malformed taxonomy record");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxonomy_model::Category;

    #[test]
    fn from_raw_excludes_malformed_associations() {
        let state = vec![
            RawAssociation {
                code: Some("EN".to_string()),
                category: Some("medium".to_string()),
                name: None,
            },
            RawAssociation {
                code: None,
                category: Some("medium".to_string()),
                name: None,
            },
        ];
        let store = AssociationStore::from_raw(RawFramework::default(), state, Vec::new());
        assert_eq!(store.state_associations.len(), 1);
        assert_eq!(store.state_associations[0].code, "EN");
        assert!(store.board_associations.is_empty());
    }

    #[test]
    fn associations_of_unknown_code_is_empty() {
        let options = vec![
            CategoryOption::new("English", "EN")
                .with_associations(vec![Association::new("G5", Category::GradeLevel)]),
        ];
        assert_eq!(associations_of(&options, "EN").len(), 1);
        assert!(associations_of(&options, "HI").is_empty());
    }
}
