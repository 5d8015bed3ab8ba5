mod common;

use std::cell::RefCell;
use std::rc::Rc;

use checklist::{
    ChecklistController, ChecklistError, ConfigIssue, Item, SelectionChanged, SelectionPolicy,
};

use common::{RecordingRenderer, RenderCall, plain_list, sentinel_list, unique_list};

fn controller(items: Vec<Item<u32>>, window: usize) -> ChecklistController<u32, RecordingRenderer> {
    ChecklistController::new(items, window, RecordingRenderer::default()).unwrap()
}

fn titles(event: &SelectionChanged<u32>) -> Vec<&str> {
    event.marked.iter().map(|item| item.title.as_str()).collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_initial_summary_uses_sentinel_title() {
    let checklist = controller(sentinel_list(&[true], &["Music", "Video"]), 5);
    assert_eq!(checklist.summary().text, "All");
    assert!(!checklist.summary().active);
    assert_eq!(checklist.header_count(), 2);
    assert_eq!(checklist.policy(), SelectionPolicy::AllSentinel { sentinel: 0 });
}

#[test]
fn test_invalid_items_rejected() {
    let result = ChecklistController::new(Vec::<Item<u32>>::new(), 5, RecordingRenderer::default());
    assert_eq!(
        result.unwrap_err(),
        ChecklistError::InvalidConfig(ConfigIssue::Empty)
    );
}

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn test_toggle_releases_sentinel() {
    let mut checklist = controller(sentinel_list(&[true, false, false], &["Music", "Video"]), 5);
    let event = checklist.toggle(1).unwrap();

    assert_eq!(checklist.store().states(), vec![false, true, false]);
    assert_eq!(event.text, "Music");
    assert_eq!(event.overflow_count, 0);
    assert_eq!(titles(&event), vec!["Music"]);
    assert_eq!(
        checklist.renderer().calls,
        vec![RenderCall::Rerender {
            states: vec![false, true, false],
            focus: Some(1)
        }]
    );
}

#[test]
fn test_toggle_patches_rendered_slot() {
    let items = plain_list(10);
    let mut checklist = controller(items, 3);
    checklist.resize_viewport(4, 3);

    checklist.toggle(5).unwrap();
    assert_eq!(
        checklist.renderer().calls,
        vec![RenderCall::Patch {
            slot: 1,
            title: "Item 5".to_string(),
            state: true
        }]
    );

    checklist.toggle(0).unwrap();
    assert!(matches!(
        checklist.renderer().calls.last(),
        Some(RenderCall::Rerender { focus: Some(0), .. })
    ));
}

#[test]
fn test_toggle_summary_counts() {
    let mut checklist = controller(sentinel_list(&[true], &["A", "B", "C", "D"]), 5);
    checklist.toggle(1).unwrap();
    checklist.toggle(2).unwrap();
    let event = checklist.toggle(3).unwrap();

    assert_eq!(event.text, "A, B");
    assert_eq!(event.overflow_count, 1);
    assert!(checklist.summary().active);
    assert_eq!(checklist.summary().counter_label().as_deref(), Some("+1"));
}

#[test]
fn test_toggle_with_measurer_fallback() {
    let mut checklist = controller(sentinel_list(&[true], &["Documentaries", "Cartoons"]), 5)
        .with_measurer(|text: &str| text.len() > 15);
    checklist.toggle(1).unwrap();
    let event = checklist.toggle(2);
    // Selecting both items selects everything: collapse to the sentinel
    assert_eq!(event.unwrap().text, "All");

    let mut checklist = controller(sentinel_list(&[true], &["Documentaries", "Cartoons", "News"]), 5)
        .with_measurer(|text: &str| text.len() > 15);
    checklist.toggle(1).unwrap();
    let event = checklist.toggle(2).unwrap();
    assert_eq!(event.text, "Documentaries");
    assert_eq!(event.overflow_count, 1);
}

#[test]
fn test_toggle_out_of_range_leaves_state() {
    let mut checklist = controller(sentinel_list(&[true], &["Music", "Video"]), 5);
    let before = checklist.store().states();
    let err = checklist.toggle(5).unwrap_err();

    assert_eq!(err, ChecklistError::IndexOutOfRange { index: 5, len: 3 });
    assert_eq!(checklist.store().states(), before);
    assert!(checklist.renderer().calls.is_empty());
    assert_eq!(checklist.focus_index(), None);
}

#[test]
fn test_unique_release_patches_both_nodes() {
    let mut checklist = controller(unique_list(&[false, false, false, true], &["A", "B", "C"]), 5);
    let event = checklist.toggle(0).unwrap();

    assert_eq!(titles(&event), vec!["A"]);
    assert_eq!(
        checklist.renderer().calls,
        vec![
            RenderCall::Patch {
                slot: 3,
                title: "Any".to_string(),
                state: false
            },
            RenderCall::Patch {
                slot: 0,
                title: "A".to_string(),
                state: true
            },
        ]
    );
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_subscribers_receive_every_change() {
    let received: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut checklist = controller(sentinel_list(&[true], &["Music", "Video", "Radio"]), 5);
    let sink = Rc::clone(&received);
    checklist.subscribe(move |event| sink.borrow_mut().push(event.text.clone()));

    checklist.toggle(1).unwrap();
    checklist.toggle(2).unwrap();
    let _ = checklist.toggle(9);
    checklist.clear_checked(None);

    assert_eq!(
        *received.borrow(),
        vec!["Music".to_string(), "Music, Video".to_string(), "All".to_string()]
    );
}

#[test]
fn test_event_serializes_camel_case() {
    let mut checklist = controller(sentinel_list(&[true], &["A", "B", "C", "D"]), 5);
    checklist.toggle(1).unwrap();
    checklist.toggle(2).unwrap();
    let event = checklist.toggle(3).unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["overflowCount"], 1);
    assert_eq!(json["text"], "A, B");
    assert_eq!(json["marked"][0]["id"], "a");
    assert_eq!(json["marked"][2]["value"], 3);
}

// ============================================================================
// Reset / clear
// ============================================================================

#[test]
fn test_reset_data_normalizes() {
    let mut checklist = controller(sentinel_list(&[true], &["Music"]), 5);
    let event = checklist
        .reset_data(sentinel_list(&[false, false, false], &["A", "B"]))
        .unwrap();

    assert_eq!(checklist.store().states(), vec![true, false, false]);
    assert_eq!(event.text, "All");
    assert_eq!(checklist.viewport().len(), 3);
    assert!(matches!(
        checklist.renderer().calls.last(),
        Some(RenderCall::Rerender { .. })
    ));
}

#[test]
fn test_reset_data_switches_policy() {
    let mut checklist = controller(sentinel_list(&[true], &["Music"]), 5);
    checklist
        .reset_data(unique_list(&[true, true, false], &["A", "B"]))
        .unwrap();
    assert_eq!(checklist.policy(), SelectionPolicy::Unique { unique: 2 });
    assert_eq!(checklist.store().states(), vec![false, false, true]);
}

#[test]
fn test_reset_data_invalid_keeps_previous() {
    let mut checklist = controller(sentinel_list(&[true], &["Music"]), 5);
    let mut bad = sentinel_list(&[], &["A"]);
    bad[1] = bad[1].clone().all_sentinel();

    assert!(checklist.reset_data(bad).is_err());
    assert_eq!(checklist.store().len(), 2);
    assert_eq!(checklist.store().get(1).unwrap().title, "Music");
    assert!(checklist.renderer().calls.is_empty());
}

#[test]
fn test_clear_checked_defaults() {
    let mut checklist = controller(sentinel_list(&[false, true, true], &["A", "B", "C"]), 5);
    let event = checklist.clear_checked(Some(2));
    assert_eq!(checklist.store().states(), vec![true, false, false, false]);
    assert_eq!(event.text, "All");
    assert_eq!(
        checklist.renderer().calls,
        vec![RenderCall::Rerender {
            states: vec![true, false, false, false],
            focus: Some(2)
        }]
    );

    let mut checklist = controller(unique_list(&[true, false], &["A", "B"]), 5);
    checklist.clear_checked(None);
    assert_eq!(checklist.store().states(), vec![false, false, true]);

    let mut checklist = controller(plain_list(3), 5);
    checklist.toggle(1).unwrap();
    let event = checklist.clear_checked(Some(7));
    assert_eq!(checklist.store().states(), vec![false; 3]);
    assert_eq!(event.text, "");
    assert_eq!(checklist.focus_index(), Some(1));
}
