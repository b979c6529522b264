use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Taxonomy category of an association or option.
///
/// The four categories form the cascade order: a medium selection narrows
/// grade levels, a grade selection narrows course types, and a course type
/// selection resolves the final subject set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Language of instruction (e.g., English, Hindi).
    #[serde(rename = "medium")]
    Medium,
    /// Grade level (e.g., Grade 5).
    #[serde(rename = "gradeLevel")]
    GradeLevel,
    /// Course type (e.g., Foundation, Mainstream).
    #[serde(rename = "courseType")]
    CourseType,
    /// Subject taught (e.g., Mathematics).
    #[serde(rename = "subject")]
    Subject,
}

impl Category {
    /// All categories in cascade order.
    pub const ALL: [Category; 4] = [
        Category::Medium,
        Category::GradeLevel,
        Category::CourseType,
        Category::Subject,
    ];

    /// Returns the wire label used by the framework backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Medium => "medium",
            Category::GradeLevel => "gradeLevel",
            Category::CourseType => "courseType",
            Category::Subject => "subject",
        }
    }

    /// Parses a wire label into a category.
    ///
    /// Returns `None` for labels outside the four recognized categories;
    /// callers treat unknown categories as "no options", not as an error.
    pub fn from_label(label: &str) -> Option<Category> {
        match label.trim() {
            "medium" => Some(Category::Medium),
            "gradeLevel" => Some(Category::GradeLevel),
            "courseType" => Some(Category::CourseType),
            "subject" => Some(Category::Subject),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Category::from_label(label).ok_or_else(|| ModelError::UnknownCategory {
            label: label.to_string(),
        })
    }
}
