//! # Triage Dispatch
//!
//! A severity-ordered admission and dispatch scheduler for intake workflows.
//!
//! Incoming entities are ranked by severity and arrival order, routed to a
//! resource keyed by their category, and moved from the admission queue into
//! an append-only treatment ledger when dispatched.
//!
//! ## Components
//!
//! - **Sequencer**: hands out strictly increasing logical arrival indices
//! - **Resource Directory**: static `category -> resource` routing plus a
//!   mutable availability flag per resource
//! - **Admission Queue**: binary min-heap on `(severity, arrival_index)`
//! - **Record Store**: latest record per entity name
//! - **Treatment Ledger**: dispatched records in dispatch order
//! - **Scheduler**: the facade that keeps the above consistent
//!
//! ## Ordering
//!
//! Lower severity is served first. Equal severities are served in arrival
//! order. No entity is dispatched ahead of a strictly higher-priority entity
//! that is still waiting.
//!
//! ```rust
//! use triage_dispatch::core::{Registration, Scheduler};
//!
//! let mut scheduler = Scheduler::default();
//! scheduler.register(Registration::new("A", 30, 3, "fever")).unwrap();
//! scheduler.register(Registration::new("B", 52, 1, "chest pain")).unwrap();
//! scheduler.register(Registration::new("C", 8, 1, "fracture")).unwrap();
//!
//! let order: Vec<_> = std::iter::from_fn(|| scheduler.dispatch_next().ok())
//!     .map(|record| record.name)
//!     .collect();
//! assert_eq!(order, ["B", "C", "A"]);
//! ```
//!
//! ## Sharing
//!
//! [`crate::core::Scheduler`] is plain owned state. Share it through
//! [`crate::core::SharedScheduler`] (one `parking_lot` mutex) or, with the
//! `tokio-runtime` feature, through `runtime::SchedulerService`, which owns
//! the scheduler on a single task and serves [`crate::runtime::SchedulerRequest`]s.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions, records and the scheduler facade.
pub mod core;
/// Configuration models for the scheduler and resource directory.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// In-memory backends for the queue, record store and ledger.
pub mod infra;
/// Request surface and runtime adapters.
pub mod runtime;
/// Shared utilities.
pub mod util;
