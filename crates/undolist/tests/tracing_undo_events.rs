#![forbid(unsafe_code)]

//! Tracing instrumentation tests for the undo path.
//!
//! Verify that recording emits one `operation recorded` event per accepted
//! mutation, that replay during `undo()` records nothing, and that growth
//! and replay events carry their structured fields.
//!
//! Run:
//!   cargo test -p undolist --test tracing_undo_events

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;

use undolist::StringList;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    target: String,
    message: String,
    fields: HashMap<String, String>,
    span: Option<String>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for EventCapture
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let mut fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.remove("message").unwrap_or_default();
        let span = ctx.event_span(event).map(|s| s.name().to_string());
        self.events.lock().unwrap().push(CapturedEvent {
            target: event.metadata().target().to_string(),
            message,
            fields,
            span,
        });
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: events.clone(),
    });
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

fn count(events: &[CapturedEvent], message: &str) -> usize {
    events.iter().filter(|e| e.message == message).count()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn each_accepted_mutation_records_once() {
    let events = capture(|| {
        let mut list: StringList = ["a", "b"].into_iter().collect();
        list.insert_back("c");
        list.set(0, "A").unwrap();
        list.insert_front("z");
        list.remove(1).unwrap();
        list.remove_all();
        let _ = list.insert_before(9, "nope");
    });
    assert_eq!(count(&events, "operation recorded"), 5);
}

#[test]
fn undo_replay_records_nothing() {
    let events = capture(|| {
        let mut list: StringList = ["x", "y"].into_iter().collect();
        list.insert_back("z");
        list.set(1, "Y").unwrap();
        list.insert_front("w");
        list.remove(2).unwrap();
        while list.undo() {}
    });
    assert_eq!(count(&events, "operation recorded"), 4);
    assert_eq!(count(&events, "operation popped"), 4);
    assert_eq!(count(&events, "operation undone"), 4);
}

#[test]
fn undone_events_sit_inside_undo_span() {
    let events = capture(|| {
        let mut list: StringList = ["a"].into_iter().collect();
        list.remove_all();
        list.undo();
    });
    let undone: Vec<_> = events
        .iter()
        .filter(|e| e.message == "operation undone")
        .collect();
    assert_eq!(undone.len(), 1);
    assert_eq!(undone[0].target, "undolist.list");
    assert_eq!(undone[0].span.as_deref(), Some("list.undo"));
    assert_eq!(undone[0].fields.get("op").map(String::as_str), Some("set_list"));
    assert_eq!(undone[0].fields.get("len").map(String::as_str), Some("1"));
}

#[test]
fn growth_reports_from_and_to() {
    let events = capture(|| {
        let mut list = StringList::new();
        for i in 0..11 {
            list.insert_back(i.to_string());
        }
    });
    let grown: Vec<_> = events
        .iter()
        .filter(|e| e.message == "capacity grown" && e.fields.get("buffer").map(String::as_str) == Some("store"))
        .collect();
    assert_eq!(grown.len(), 1);
    assert_eq!(grown[0].target, "undolist.slots");
    assert_eq!(grown[0].fields.get("from").map(String::as_str), Some("10"));
    assert_eq!(grown[0].fields.get("to").map(String::as_str), Some("20"));
}

#[test]
fn empty_undo_emits_nothing() {
    let events = capture(|| {
        let mut list = StringList::new();
        list.undo();
    });
    assert!(events.is_empty(), "unexpected events: {events:?}");
}
