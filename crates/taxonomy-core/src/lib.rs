//! Cascading taxonomy filter core.
//!
//! The pipeline: [`store::AssociationStore`] feeds the category resolver,
//! resolver output is narrowed per context by the association filter,
//! narrowed lists are merged by the set intersector, and the
//! [`cascade::CascadeController`] drives the pipeline stage by stage,
//! persisting the final resolved subject list through a
//! [`taxonomy_persist::SubjectStore`].

pub mod cascade;
pub mod filter;
pub mod intersect;
pub mod resolver;
pub mod store;

pub use cascade::{CascadeController, CascadeError, CascadeStage, CascadeState};
pub use filter::{filter_by_association, has_category};
pub use intersect::{FilterContext, intersect, intersect_all, intersect_contexts};
pub use resolver::{options_by_category, options_by_label};
pub use store::{AssociationStore, associations_of};
