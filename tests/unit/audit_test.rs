//! Tests for audit sink

use triage_dispatch::core::{
    build_audit_event, AuditAction, AuditSink, InMemoryAuditSink, Registration, ResourceId,
    Scheduler,
};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(
        0,
        AuditAction::Registered,
        "asha",
        Some(ResourceId::new("mehta")),
        Some(0),
    );

    sink.record(event.clone());
    let events = sink.snapshot();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], event);
    assert_eq!(events[0].subject, "asha");
    assert_eq!(events[0].action, AuditAction::Registered);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(0, AuditAction::Registered, "a", None, Some(0)));
    sink.record(build_audit_event(1, AuditAction::Registered, "b", None, Some(1)));
    sink.record(build_audit_event(2, AuditAction::Dispatched, "a", None, Some(0)));

    let events = sink.snapshot();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].sequence, 1); // First one popped
    assert_eq!(events[1].sequence, 2);
}

#[test]
fn test_zero_capacity_sink_records_nothing() {
    let mut sink = InMemoryAuditSink::new(0);
    sink.record(build_audit_event(0, AuditAction::Released, "rao", None, None));
    assert!(sink.snapshot().is_empty());
}

#[test]
fn test_event_ids_are_unique() {
    let a = build_audit_event(0, AuditAction::Released, "rao", None, None);
    let b = build_audit_event(0, AuditAction::Released, "rao", None, None);
    assert_ne!(a.event_id, b.event_id);
}

#[test]
fn test_scheduler_audits_successful_operations_only() {
    let mut scheduler = Scheduler::default().with_audit(Box::new(InMemoryAuditSink::new(16)));

    scheduler.register(Registration::new("asha", 30, 2, "burn")).unwrap();
    scheduler.dispatch_next().unwrap();
    assert!(scheduler.dispatch_next().is_err());
    scheduler.release_resource(&ResourceId::new("sinha")).unwrap();
    assert!(scheduler.release_resource(&ResourceId::new("nobody")).is_err());

    let trail = scheduler.audit_trail();
    let actions: Vec<_> = trail.iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![AuditAction::Registered, AuditAction::Dispatched, AuditAction::Released]
    );
    let sequences: Vec<_> = trail.iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2]);
    assert_eq!(trail[1].arrival_index, Some(0));
    assert_eq!(trail[2].resource, Some(ResourceId::new("sinha")));
}
