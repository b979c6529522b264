//! Course taxonomy data model.
//!
//! Typed records for the cascade ([`Category`], [`Association`],
//! [`CategoryOption`], [`Framework`]) plus raw boundary records in
//! [`raw`] that validate loosely shaped backend payloads on conversion.

pub mod association;
pub mod category;
pub mod error;
pub mod framework;
pub mod raw;

pub use association::{Association, CategoryOption};
pub use category::Category;
pub use error::{ModelError, Result};
pub use framework::Framework;
pub use raw::{RawAssociation, RawCategory, RawFramework, RawTerm};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_subject_list_round_trips() {
        let subjects = vec![
            CategoryOption::new("Mathematics", "SUB1")
                .with_associations(vec![Association::new("G5", Category::GradeLevel)]),
            CategoryOption::new("Science", "SUB2"),
        ];
        let json = serde_json::to_string(&subjects).expect("serialize subjects");
        let round: Vec<CategoryOption> = serde_json::from_str(&json).expect("deserialize subjects");
        assert_eq!(round, subjects);
    }
}
