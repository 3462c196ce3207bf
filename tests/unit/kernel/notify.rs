use super::*;
use std::path::PathBuf;

fn center(max: usize) -> NotificationCenter {
    NotificationCenter::new(&SessionConfig {
        max_notifications: max,
        notification_ttl_ms: 12_000,
    })
}

#[test]
fn enqueue_beyond_bound_evicts_oldest_evictable_first() {
    let now = Instant::now();
    let mut center = center(3);

    let loading = center.enqueue("working…", Severity::Loading, None, None, now);
    let first = center.enqueue("one", Severity::Success, None, None, now);
    center.enqueue("two", Severity::Success, None, None, now);
    center.enqueue("three", Severity::Success, None, None, now);

    assert_eq!(center.entries().len(), 3);
    assert!(center.entries().iter().any(|n| n.id == loading));
    assert!(center.entries().iter().all(|n| n.id != first));
}

#[test]
fn eviction_falls_back_to_oldest_loading_when_everything_is_pinned() {
    let now = Instant::now();
    let mut center = center(2);

    let oldest = center.enqueue("a", Severity::Loading, None, None, now);
    center.enqueue("b", Severity::Loading, None, None, now);
    center.enqueue("c", Severity::Loading, None, None, now);

    assert_eq!(center.entries().len(), 2);
    assert!(center.entries().iter().all(|n| n.id != oldest));
}

#[test]
fn loading_entries_never_auto_expire() {
    let now = Instant::now();
    let mut center = center(5);

    center.enqueue("spinner", Severity::Loading, None, None, now);
    center.enqueue("toast", Severity::Success, None, None, now);

    let changed = center.tick(now + Duration::from_secs(60));
    assert!(changed);
    assert_eq!(center.entries().len(), 1);
    assert_eq!(center.entries()[0].severity, Severity::Loading);
}

#[test]
fn complete_swaps_loading_for_success_atomically() {
    let now = Instant::now();
    let mut center = center(5);

    let id = center.enqueue(
        "working…",
        Severity::Loading,
        Some("ctx".to_string()),
        None,
        now,
    );
    let done = center.complete(id, "done", now).unwrap();

    assert_eq!(center.entries().len(), 1);
    let entry = &center.entries()[0];
    assert_eq!(entry.id, done);
    assert_eq!(entry.severity, Severity::Success);
    assert_eq!(entry.context.as_deref(), Some("ctx"));
    assert_eq!(entry.expires_after, Some(Duration::from_secs(12)));

    // The handle is spent.
    assert!(center.complete(id, "again", now).is_none());
}

#[test]
fn complete_on_a_non_loading_handle_is_refused() {
    let now = Instant::now();
    let mut center = center(5);
    let id = center.enqueue("toast", Severity::Success, None, None, now);
    assert!(center.complete(id, "nope", now).is_none());
    assert_eq!(center.entries().len(), 1);
}

#[test]
fn dismiss_rules() {
    let now = Instant::now();
    let mut center = center(5);

    let loading = center.enqueue("spinner", Severity::Loading, None, None, now);
    let toast = center.enqueue("toast", Severity::Warning, None, None, now);

    assert!(!center.dismiss(loading));
    assert!(center.dismiss(toast));
    assert!(!center.dismiss(toast));
    assert_eq!(center.entries().len(), 1);
}

#[test]
fn selection_events_drive_the_loading_entry() {
    let now = Instant::now();
    let mut center = center(5);
    let root = PathBuf::from("/ws");

    center.observe(&SessionEvent::SelectionStarted { root: root.clone() }, now);
    assert_eq!(center.entries().len(), 1);
    assert_eq!(center.entries()[0].severity, Severity::Loading);

    center.observe(&SessionEvent::WorkspaceLoaded { root }, now);
    assert_eq!(center.entries().len(), 1);
    assert_eq!(center.entries()[0].severity, Severity::Success);
    assert_eq!(center.entries()[0].context.as_deref(), Some("/ws"));
}

#[test]
fn selection_failure_clears_the_loading_entry() {
    let now = Instant::now();
    let mut center = center(5);
    let root = PathBuf::from("/ws");

    center.observe(&SessionEvent::SelectionStarted { root: root.clone() }, now);
    center.observe(
        &SessionEvent::WorkspaceLoadFailed {
            root,
            error: "not found".to_string(),
        },
        now,
    );

    assert_eq!(center.entries().len(), 1);
    assert_eq!(center.entries()[0].severity, Severity::Error);
}

#[test]
fn failure_events_become_error_toasts() {
    let now = Instant::now();
    let mut center = center(5);

    center.observe(
        &SessionEvent::SaveFailed {
            path: PathBuf::from("/ws/a.rs"),
            error: "disk full".to_string(),
        },
        now,
    );

    let entry = &center.entries()[0];
    assert_eq!(entry.severity, Severity::Error);
    assert!(entry.message.contains("a.rs"));
    assert!(entry.message.contains("disk full"));
}
