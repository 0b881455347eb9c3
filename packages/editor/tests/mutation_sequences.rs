//! Comprehensive tests for mutation sequences
//!
//! This tests:
//! - Undo/redo over many steps
//! - Failed mutations leaving history untouched
//! - Batched mutations
//! - Snapshots surviving later edits

use profilekit_catalog::Catalog;
use profilekit_editor::{initialize, History, HistoryError, Mutation};

fn setup() -> (Catalog, History) {
    let catalog = Catalog::builtin().unwrap();
    let doc = initialize(&catalog, "researcher", None).unwrap();
    (catalog, History::new(doc))
}

fn mutations(history: &History) -> Vec<Mutation> {
    let ids: Vec<String> = history.current().section_ids().iter().map(|s| s.to_string()).collect();

    vec![
        Mutation::UpdateFieldValue {
            section_id: ids[0].clone(),
            field: "title".to_string(),
            value: "Dr. {{name}}".to_string(),
        },
        Mutation::AddSection {
            component_id: "quote".to_string(),
            position: 1,
        },
        Mutation::RemoveSection {
            section_id: ids[2].clone(),
        },
        Mutation::ReplaceComponent {
            section_id: ids[0].clone(),
            component_id: "header-banner".to_string(),
        },
    ]
}

fn reverse_order(history: &History) -> Mutation {
    let mut order: Vec<String> =
        history.current().section_ids().iter().map(|s| s.to_string()).collect();
    order.reverse();
    Mutation::ReorderSections { order }
}

#[test]
fn test_n_undos_restore_initial_state() {
    let (catalog, mut history) = setup();
    let initial = history.current().clone();

    let mut steps = mutations(&history);
    let mut after_each = Vec::new();
    for (i, mutation) in steps.iter().enumerate() {
        history
            .apply(mutation, &catalog)
            .unwrap_or_else(|e| panic!("step {} failed: {}", i, e));
        after_each.push(history.current().clone());
    }

    // The reorder has to name the sections as they are now
    let reorder = reverse_order(&history);
    history.apply(&reorder, &catalog).unwrap();
    after_each.push(history.current().clone());
    steps.push(reorder);

    let last = history.current().clone();
    assert_eq!(history.undo_levels(), steps.len());

    for expected in after_each.iter().rev().skip(1) {
        history.undo().unwrap();
        assert_eq!(history.current(), expected);
    }
    history.undo().unwrap();
    assert_eq!(history.current(), &initial);

    assert_eq!(history.undo().unwrap_err(), HistoryError::NothingToUndo);

    for _ in 0..steps.len() {
        history.redo().unwrap();
    }
    assert_eq!(history.current(), &last);
    assert_eq!(history.redo().unwrap_err(), HistoryError::NothingToRedo);
}

#[test]
fn test_redo_restores_exact_state() {
    let (catalog, mut history) = setup();
    let add = Mutation::AddSection {
        component_id: "github-stats".to_string(),
        position: 0,
    };

    history.apply(&add, &catalog).unwrap();
    let mutated = history.current().clone();

    history.undo().unwrap();
    history.redo().unwrap();

    assert_eq!(history.current(), &mutated);
    assert!(history.current().is_same(&mutated));
}

#[test]
fn test_snapshots_survive_later_edits() {
    let (catalog, mut history) = setup();
    let header = history.current().sections()[0].id.clone();

    for value in ["One", "Two", "Three"] {
        history
            .apply(
                &Mutation::UpdateFieldValue {
                    section_id: header.clone(),
                    field: "title".to_string(),
                    value: value.to_string(),
                },
                &catalog,
            )
            .unwrap();
    }

    history.undo().unwrap();
    assert_eq!(history.current().section(&header).unwrap().value("title"), Some("Two"));
    history.undo().unwrap();
    assert_eq!(history.current().section(&header).unwrap().value("title"), Some("One"));
    history.undo().unwrap();
    assert_eq!(history.current().section(&header).unwrap().value("title"), None);
}

#[test]
fn test_failed_mutation_leaves_history_alone() {
    let (catalog, mut history) = setup();
    let before = history.current().clone();

    let bad = Mutation::ReorderSections {
        order: vec!["nope".to_string()],
    };
    assert!(history.apply(&bad, &catalog).is_err());

    assert_eq!(history.current(), &before);
    assert!(!history.can_undo());
}

#[test]
fn test_undo_closes_open_batch() {
    let (catalog, mut history) = setup();
    let initial = history.current().clone();

    history.begin_batch(Some("Add extras".to_string()));
    for component in ["quote", "github-stats"] {
        history
            .apply(
                &Mutation::AddSection {
                    component_id: component.to_string(),
                    position: usize::MAX,
                },
                &catalog,
            )
            .unwrap();
    }

    assert!(history.is_batching());
    history.undo().unwrap();

    assert!(!history.is_batching());
    assert_eq!(history.current(), &initial);
    assert_eq!(history.redo_description(), Some("Add extras"));
}

#[test]
fn test_long_edit_runs_undo_back_to_the_start() {
    let (catalog, mut history) = setup();
    let initial = history.current().clone();
    let header = initial.sections()[0].id.clone();

    for i in 0..101 {
        let mutation = Mutation::UpdateFieldValue {
            section_id: header.clone(),
            field: "title".to_string(),
            value: format!("Draft {}", i),
        };
        history.apply(&mutation, &catalog).unwrap();
    }
    assert_eq!(history.undo_levels(), 101);

    for _ in 0..101 {
        history.undo().unwrap();
    }
    assert_eq!(history.current(), &initial);
    assert_eq!(history.undo(), Err(HistoryError::NothingToUndo));
}
