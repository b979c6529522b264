//! Cascade controller: the four-stage dependent filter state machine.
//!
//! Stages run medium -> grade -> type -> subject. Each selection recomputes
//! the next stage's option set by filtering the framework's candidates
//! against every applicable context (state, board, and the associations
//! of each upstream selection) and folding the filtered lists through
//! [`intersect_contexts`]. Re-selecting an upstream stage synchronously
//! clears all downstream selections and option lists, so no stale
//! downstream option stays selectable.
//!
//! All recomputation is synchronous; each selection event completes its
//! recomputation before the next is processed, so state between calls
//! always satisfies the stage-emptiness invariants.

use thiserror::Error;
use tracing::{debug, warn};

use taxonomy_model::{Association, Category, CategoryOption};
use taxonomy_persist::SubjectStore;

use crate::intersect::{FilterContext, intersect_contexts};
use crate::resolver::options_by_category;
use crate::store::{AssociationStore, associations_of};

#[derive(Debug, Error)]
pub enum CascadeError {
    #[error("no {category} options are available yet; select the upstream stage first")]
    StageNotReady { category: Category },
    #[error("code {code} is not among the current {category} options")]
    UnknownCode { category: Category, code: String },
}

/// Observable state of the cascade between selection events.
///
/// Selecting a course type computes the final subject list within the
/// same event, so there is no observable state between "type selected"
/// and "subjects resolved".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStage {
    Empty,
    MediumSelected,
    GradeSelected,
    SubjectResolved,
}

/// Option lists and selections of every cascade stage.
///
/// Mutated only by [`CascadeController`]; between calls, each downstream
/// option list is non-empty only when its upstream selection is set.
#[derive(Debug, Clone, Default)]
pub struct CascadeState {
    pub medium: Vec<CategoryOption>,
    pub selected_medium: Option<String>,
    pub grade: Vec<CategoryOption>,
    pub selected_grade: Option<String>,
    pub course_type: Vec<CategoryOption>,
    pub selected_type: Option<String>,
    pub subject: Vec<CategoryOption>,
}

/// Drives the cascade over one session's frozen [`AssociationStore`].
pub struct CascadeController {
    store: AssociationStore,
    subject_store: Box<dyn SubjectStore>,
    state: CascadeState,
    restored_subjects: Vec<CategoryOption>,
    medium_associations: Vec<Association>,
    grade_associations: Vec<Association>,
    type_associations: Vec<Association>,
}

impl CascadeController {
    /// Creates a controller for one session and computes the initial
    /// medium options from the state and board contexts.
    ///
    /// Any subject list persisted by a previous completed session is read
    /// once here and exposed through [`Self::restored_subjects`]; the
    /// live cascade state starts empty regardless.
    pub fn new(store: AssociationStore, subject_store: Box<dyn SubjectStore>) -> Self {
        let mediums = options_by_category(&store.framework, Category::Medium);
        let contexts = [
            FilterContext::from_reference(
                "state",
                Category::Medium,
                mediums,
                &store.state_associations,
            ),
            FilterContext::from_reference(
                "board",
                Category::Medium,
                mediums,
                &store.board_associations,
            ),
        ];
        let medium = intersect_contexts(&contexts);
        debug!(options = medium.len(), "computed initial medium options");

        let restored_subjects = subject_store.load();
        Self {
            store,
            subject_store,
            state: CascadeState {
                medium,
                ..CascadeState::default()
            },
            restored_subjects,
            medium_associations: Vec::new(),
            grade_associations: Vec::new(),
            type_associations: Vec::new(),
        }
    }

    pub fn stage(&self) -> CascadeStage {
        if self.state.selected_type.is_some() {
            CascadeStage::SubjectResolved
        } else if self.state.selected_grade.is_some() {
            CascadeStage::GradeSelected
        } else if self.state.selected_medium.is_some() {
            CascadeStage::MediumSelected
        } else {
            CascadeStage::Empty
        }
    }

    pub fn state(&self) -> &CascadeState {
        &self.state
    }

    pub fn medium_options(&self) -> &[CategoryOption] {
        &self.state.medium
    }

    pub fn grade_options(&self) -> &[CategoryOption] {
        &self.state.grade
    }

    pub fn type_options(&self) -> &[CategoryOption] {
        &self.state.course_type
    }

    /// The resolved subject list of the current session, empty until a
    /// course type has been selected.
    pub fn subjects(&self) -> &[CategoryOption] {
        &self.state.subject
    }

    /// The subject list persisted by a previous completed session, read
    /// once at construction.
    pub fn restored_subjects(&self) -> &[CategoryOption] {
        &self.restored_subjects
    }

    /// Selects a medium and recomputes the grade options from the state,
    /// board, and medium contexts. Clears every downstream stage.
    pub fn select_medium(&mut self, code: &str) -> Result<&[CategoryOption], CascadeError> {
        ensure_known(Category::Medium, &self.state.medium, code)?;
        self.state.selected_medium = Some(code.to_string());
        self.medium_associations = associations_of(&self.state.medium, code);
        self.clear_grade_down();

        let grades = options_by_category(&self.store.framework, Category::GradeLevel);
        let contexts = [
            FilterContext::from_reference(
                "state",
                Category::GradeLevel,
                grades,
                &self.store.state_associations,
            ),
            FilterContext::from_reference(
                "board",
                Category::GradeLevel,
                grades,
                &self.store.board_associations,
            ),
            FilterContext::from_reference(
                "medium",
                Category::GradeLevel,
                grades,
                &self.medium_associations,
            ),
        ];
        self.state.grade = intersect_contexts(&contexts);
        debug!(
            medium = code,
            options = self.state.grade.len(),
            "recomputed grade options"
        );
        Ok(&self.state.grade)
    }

    /// Selects a grade and recomputes the course type options, folding in
    /// the grade context. Clears the type and subject stages.
    pub fn select_grade(&mut self, code: &str) -> Result<&[CategoryOption], CascadeError> {
        if self.state.selected_medium.is_none() {
            return Err(CascadeError::StageNotReady {
                category: Category::GradeLevel,
            });
        }
        ensure_known(Category::GradeLevel, &self.state.grade, code)?;
        self.state.selected_grade = Some(code.to_string());
        self.grade_associations = associations_of(&self.state.grade, code);
        self.clear_type_down();

        let types = options_by_category(&self.store.framework, Category::CourseType);
        let contexts = [
            FilterContext::from_reference(
                "state",
                Category::CourseType,
                types,
                &self.store.state_associations,
            ),
            FilterContext::from_reference(
                "board",
                Category::CourseType,
                types,
                &self.store.board_associations,
            ),
            FilterContext::from_reference(
                "medium",
                Category::CourseType,
                types,
                &self.medium_associations,
            ),
            FilterContext::from_reference(
                "grade",
                Category::CourseType,
                types,
                &self.grade_associations,
            ),
        ];
        self.state.course_type = intersect_contexts(&contexts);
        debug!(
            grade = code,
            options = self.state.course_type.len(),
            "recomputed course type options"
        );
        Ok(&self.state.course_type)
    }

    /// Selects a course type and resolves the final subject list as the
    /// five-way intersection across the state, board, medium, grade, and
    /// type contexts. The resolved list is persisted under the fixed
    /// storage key; a storage write failure is logged and does not fail
    /// the selection.
    pub fn select_type(&mut self, code: &str) -> Result<&[CategoryOption], CascadeError> {
        if self.state.selected_grade.is_none() {
            return Err(CascadeError::StageNotReady {
                category: Category::CourseType,
            });
        }
        ensure_known(Category::CourseType, &self.state.course_type, code)?;
        self.state.selected_type = Some(code.to_string());
        self.type_associations = associations_of(&self.state.course_type, code);

        let subjects = options_by_category(&self.store.framework, Category::Subject);
        let contexts = [
            FilterContext::from_reference(
                "state",
                Category::Subject,
                subjects,
                &self.store.state_associations,
            ),
            FilterContext::from_reference(
                "board",
                Category::Subject,
                subjects,
                &self.store.board_associations,
            ),
            FilterContext::from_reference(
                "medium",
                Category::Subject,
                subjects,
                &self.medium_associations,
            ),
            FilterContext::from_reference(
                "grade",
                Category::Subject,
                subjects,
                &self.grade_associations,
            ),
            FilterContext::from_reference(
                "type",
                Category::Subject,
                subjects,
                &self.type_associations,
            ),
        ];
        self.state.subject = intersect_contexts(&contexts);
        debug!(
            course_type = code,
            subjects = self.state.subject.len(),
            "resolved subject list"
        );

        if let Err(error) = self.subject_store.save(&self.state.subject) {
            warn!(%error, "failed to persist resolved subjects; continuing without durability");
        }
        Ok(&self.state.subject)
    }

    /// Returns the chosen subject option; the caller forwards its name to
    /// the content-creation flow.
    pub fn select_subject(&self, code: &str) -> Result<&CategoryOption, CascadeError> {
        if self.state.selected_type.is_none() {
            return Err(CascadeError::StageNotReady {
                category: Category::Subject,
            });
        }
        self.state
            .subject
            .iter()
            .find(|subject| subject.code == code)
            .ok_or_else(|| CascadeError::UnknownCode {
                category: Category::Subject,
                code: code.to_string(),
            })
    }

    /// Clears the medium selection and every downstream stage. The
    /// medium option list itself is untouched; it depends only on the
    /// session's state and board contexts.
    pub fn clear_medium(&mut self) {
        self.state.selected_medium = None;
        self.medium_associations.clear();
        self.clear_grade_down();
    }

    /// Clears the grade selection and every downstream stage. The grade
    /// option list stays; it derives from the medium selection.
    pub fn clear_grade(&mut self) {
        self.state.selected_grade = None;
        self.grade_associations.clear();
        self.clear_type_down();
    }

    /// Clears the type selection and the resolved subject list.
    pub fn clear_type(&mut self) {
        self.state.selected_type = None;
        self.type_associations.clear();
        self.state.subject.clear();
    }

    fn clear_grade_down(&mut self) {
        self.state.grade.clear();
        self.state.selected_grade = None;
        self.grade_associations.clear();
        self.clear_type_down();
    }

    fn clear_type_down(&mut self) {
        self.state.course_type.clear();
        self.state.selected_type = None;
        self.type_associations.clear();
        self.state.subject.clear();
    }
}

fn ensure_known(
    category: Category,
    options: &[CategoryOption],
    code: &str,
) -> Result<(), CascadeError> {
    if options.iter().any(|option| option.code == code) {
        Ok(())
    } else {
        Err(CascadeError::UnknownCode {
            category,
            code: code.to_string(),
        })
    }
}
