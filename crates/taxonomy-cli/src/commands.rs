use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, warn};

use taxonomy_core::cascade::CascadeController;
use taxonomy_core::store::AssociationStore;
use taxonomy_model::{Category, RawAssociation, RawFramework, RawTerm};
use taxonomy_persist::{JsonFileStore, MemoryStore, SUBJECTS_KEY, SubjectStore};

use crate::cli::{CascadeArgs, CategoriesArgs};
use crate::summary::{apply_table_style, print_options_table};

pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let raw: RawFramework = read_json(&args.framework).context("load framework payload")?;
    let store = AssociationStore::from_raw(raw, Vec::new(), Vec::new());
    let mut table = Table::new();
    table.set_header(vec!["Category", "Options"]);
    apply_table_style(&mut table);
    for category in Category::ALL {
        table.add_row(vec![
            category.to_string(),
            store.framework.options_in(category).len().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_cascade(args: &CascadeArgs) -> Result<()> {
    let framework: RawFramework = read_json(&args.framework).context("load framework payload")?;
    let state: Vec<RawAssociation> =
        read_json(&args.state_associations).context("load state associations")?;
    let boards: Vec<RawTerm> = read_json(&args.boards).context("load boards payload")?;
    let board_associations = board_associations(boards, &args.board);

    let store = AssociationStore::from_raw(framework, state, board_associations);
    let subject_store: Box<dyn SubjectStore> = match &args.store_dir {
        Some(dir) => Box::new(JsonFileStore::new(dir)),
        None => Box::new(MemoryStore::new()),
    };
    let mut controller = CascadeController::new(store, subject_store);
    info!(
        board = %args.board,
        mediums = controller.medium_options().len(),
        "cascade session ready"
    );

    if !controller.restored_subjects().is_empty() {
        print_options_table(
            "Subjects resolved in a previous session",
            controller.restored_subjects(),
        );
    }
    print_options_table("Medium options", controller.medium_options());

    let Some(medium) = &args.medium else {
        return Ok(());
    };
    let grades = controller.select_medium(medium)?;
    print_options_table("Grade options", grades);

    let Some(grade) = &args.grade else {
        return Ok(());
    };
    let types = controller.select_grade(grade)?;
    print_options_table("Course type options", types);

    let Some(course_type) = &args.course_type else {
        return Ok(());
    };
    let subjects = controller.select_type(course_type)?;
    print_options_table("Common subjects", subjects);
    if let Some(dir) = &args.store_dir {
        println!(
            "Resolved subjects stored under key {SUBJECTS_KEY} in {}",
            dir.display()
        );
    }

    let Some(subject) = &args.subject else {
        return Ok(());
    };
    let chosen = controller.select_subject(subject)?;
    println!();
    println!("Create content for subject: {}", chosen.name);
    println!("Navigation target: {}", navigation_target(&chosen.name));
    Ok(())
}

/// Builds the content-creation navigation target for a subject. Subject
/// names carry spaces and punctuation, so the name is percent-encoded
/// into the query string.
fn navigation_target(name: &str) -> String {
    format!("importCsv?subject={}", urlencoding::encode(name))
}

/// Extracts the association list of the requested board from the boards
/// payload, matching by code first and display name second. A missing
/// board is tolerated with an empty board context, like an absent
/// category in the UI.
fn board_associations(mut boards: Vec<RawTerm>, board: &str) -> Vec<RawAssociation> {
    let found = boards
        .iter()
        .position(|term| term.code.as_deref() == Some(board))
        .or_else(|| {
            boards
                .iter()
                .position(|term| term.name.as_deref() == Some(board))
        });
    match found {
        Some(index) => boards.swap_remove(index).associations,
        None => {
            warn!(board, "board not found in boards payload; continuing with empty board context");
            Vec::new()
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(name: &str, code: &str) -> RawTerm {
        RawTerm {
            name: Some(name.to_string()),
            code: Some(code.to_string()),
            associations: vec![RawAssociation {
                code: Some("EN".to_string()),
                category: Some("medium".to_string()),
                name: None,
            }],
        }
    }

    #[test]
    fn navigation_target_encodes_subject_names() {
        assert_eq!(
            navigation_target("Social Science"),
            "importCsv?subject=Social%20Science"
        );
        assert_eq!(navigation_target("Maths"), "importCsv?subject=Maths");
    }

    #[test]
    fn board_lookup_prefers_code_then_name() {
        let boards = vec![term("State Board", "SB"), term("Central Board", "CB")];
        assert_eq!(board_associations(boards.clone(), "CB").len(), 1);
        assert_eq!(board_associations(boards.clone(), "State Board").len(), 1);
        assert!(board_associations(boards, "Unknown Board").is_empty());
    }
}
