use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A (code, category) pair asserting that a code belongs to a category
/// within some context: the state, the board, or another option's nested
/// association list. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    /// Identifying code of the associated value (e.g., "EN").
    pub code: String,
    /// Category the code belongs to within this context.
    pub category: Category,
}

impl Association {
    pub fn new(code: impl Into<String>, category: Category) -> Self {
        Self {
            code: code.into(),
            category,
        }
    }

    /// Returns true when this association asserts membership of `code`
    /// in `category`. Matching is by exact code equality; names never
    /// participate in matching.
    pub fn matches(&self, category: Category, code: &str) -> bool {
        self.category == category && self.code == code
    }
}

/// A selectable taxonomy value: a display name, a unique code within its
/// category, and the further associations it implies for downstream
/// cascade stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    /// Display name. Names are for display only; casing and whitespace
    /// may differ across sources for the same code.
    pub name: String,
    /// Identifying code, unique within the option's category.
    pub code: String,
    /// Associations this option implies for other categories.
    #[serde(default)]
    pub associations: Vec<Association>,
}

impl CategoryOption {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            associations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_associations(mut self, associations: Vec<Association>) -> Self {
        self.associations = associations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn association_matching_requires_category_and_code() {
        let assoc = Association::new("EN", Category::Medium);
        assert!(assoc.matches(Category::Medium, "EN"));
        assert!(!assoc.matches(Category::GradeLevel, "EN"));
        assert!(!assoc.matches(Category::Medium, "HI"));
    }

    #[test]
    fn option_serializes_with_wire_field_names() {
        let option = CategoryOption::new("English", "EN")
            .with_associations(vec![Association::new("G5", Category::GradeLevel)]);
        let json = serde_json::to_string(&option).expect("serialize option");
        let back: CategoryOption = serde_json::from_str(&json).expect("deserialize option");
        assert_eq!(back, option);
        assert!(json.contains("\"gradeLevel\""));
    }

    #[test]
    fn option_without_associations_deserializes() {
        let back: CategoryOption =
            serde_json::from_str(r#"{"name":"English","code":"EN"}"#).expect("deserialize");
        assert!(back.associations.is_empty());
    }
}
