//! Raw boundary records for external taxonomy payloads.
//!
//! Backend payloads are loosely shaped: fields may be absent, and category
//! labels may fall outside the four recognized categories. Every field is
//! therefore optional at this layer, and conversion into the typed model
//! validates each record. Records missing `code` or `category` are
//! excluded with a malformed-record diagnostic rather than propagated
//! half-shaped into the cascade.

use serde::Deserialize;

use crate::association::{Association, CategoryOption};
use crate::category::Category;
use crate::error::ModelError;
use crate::framework::Framework;

/// An association record as received from the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAssociation {
    pub code: Option<String>,
    pub category: Option<String>,
    /// Display name of the associated value; carried in backend payloads
    /// but never used for matching.
    pub name: Option<String>,
}

/// A selectable term as received from the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTerm {
    pub name: Option<String>,
    pub code: Option<String>,
    #[serde(default)]
    pub associations: Vec<RawAssociation>,
}

/// One category block of a framework payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    /// Category label (e.g., "medium", "gradeLevel").
    pub code: Option<String>,
    #[serde(default)]
    pub terms: Vec<RawTerm>,
}

/// A full framework payload: all category blocks with their terms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFramework {
    #[serde(default)]
    pub categories: Vec<RawCategory>,
}

impl TryFrom<RawAssociation> for Association {
    type Error = ModelError;

    fn try_from(raw: RawAssociation) -> Result<Self, Self::Error> {
        let code = non_empty(raw.code).ok_or_else(|| {
            ModelError::malformed("association record is missing its code field")
        })?;
        let label = non_empty(raw.category).ok_or_else(|| {
            ModelError::malformed(format!("association {code} is missing its category field"))
        })?;
        let category = Category::from_label(&label).ok_or(ModelError::UnknownCategory {
            label: label.clone(),
        })?;
        Ok(Association { code, category })
    }
}

/// Converts raw associations into typed ones, collecting a diagnostic per
/// excluded record instead of failing the batch.
pub fn convert_associations(raw: Vec<RawAssociation>) -> (Vec<Association>, Vec<ModelError>) {
    let mut associations = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();
    for record in raw {
        match Association::try_from(record) {
            Ok(association) => associations.push(association),
            Err(error) => rejected.push(error),
        }
    }
    (associations, rejected)
}

/// Converts raw terms into typed options.
///
/// Terms without a code are excluded, as are malformed associations nested
/// inside a kept term; one diagnostic is collected per exclusion. Names are
/// display-only, so a missing name falls back to the code.
pub fn convert_terms(raw: Vec<RawTerm>) -> (Vec<CategoryOption>, Vec<ModelError>) {
    let mut options = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();
    for term in raw {
        let Some(code) = non_empty(term.code) else {
            rejected.push(ModelError::malformed("term record is missing its code field"));
            continue;
        };
        let name = non_empty(term.name).unwrap_or_else(|| code.clone());
        let (associations, dropped) = convert_associations(term.associations);
        rejected.extend(dropped);
        options.push(CategoryOption {
            name,
            code,
            associations,
        });
    }
    (options, rejected)
}

impl RawFramework {
    /// Converts the payload into a typed [`Framework`].
    ///
    /// Category blocks with an unrecognized label and terms without a code
    /// are excluded; one diagnostic is collected per exclusion so the
    /// caller can log them. Malformed associations nested inside a kept
    /// term are likewise dropped from that term.
    pub fn into_framework(self) -> (Framework, Vec<ModelError>) {
        let mut framework = Framework::new();
        let mut rejected = Vec::new();
        for block in self.categories {
            let Some(label) = non_empty(block.code) else {
                rejected.push(ModelError::malformed(
                    "framework category block is missing its code field",
                ));
                continue;
            };
            let Some(category) = Category::from_label(&label) else {
                rejected.push(ModelError::UnknownCategory { label });
                continue;
            };
            let (options, dropped) = convert_terms(block.terms);
            rejected.extend(dropped);
            for option in options {
                framework.add_option(category, option);
            }
        }
        (framework, rejected)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn association_without_code_is_rejected() {
        let raw = RawAssociation {
            code: None,
            category: Some("medium".to_string()),
            name: Some("English".to_string()),
        };
        let error = Association::try_from(raw).unwrap_err();
        assert!(matches!(error, ModelError::MalformedRecord { .. }));
    }

    #[test]
    fn association_with_blank_category_is_rejected() {
        let raw = RawAssociation {
            code: Some("EN".to_string()),
            category: Some("  ".to_string()),
            name: None,
        };
        assert!(Association::try_from(raw).is_err());
    }

    #[test]
    fn term_name_falls_back_to_code() {
        let raw = RawTerm {
            name: None,
            code: Some("SUB1".to_string()),
            associations: Vec::new(),
        };
        let (options, rejected) = convert_terms(vec![raw]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].name, "SUB1");
        assert!(rejected.is_empty());
    }

    #[test]
    fn framework_conversion_excludes_malformed_records() {
        let payload = r#"{
            "categories": [
                {
                    "code": "medium",
                    "terms": [
                        {"name": "English", "code": "EN",
                         "associations": [
                            {"code": "G5", "category": "gradeLevel"},
                            {"category": "gradeLevel"}
                         ]},
                        {"name": "No Code"}
                    ]
                },
                {"code": "board", "terms": []},
                {"terms": []}
            ]
        }"#;
        let raw: RawFramework = serde_json::from_str(payload).expect("parse payload");
        let (framework, rejected) = raw.into_framework();

        let mediums = framework.options_in(Category::Medium);
        assert_eq!(mediums.len(), 1);
        assert_eq!(mediums[0].code, "EN");
        assert_eq!(mediums[0].associations.len(), 1);

        // nested association without code, term without code, unknown
        // category block, block without code
        assert_eq!(rejected.len(), 4);
    }
}
