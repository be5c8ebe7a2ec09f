//! Backend for the SDET course marketing site: a static course catalog,
//! validated enrollment/contact form intake, and a health report, all served
//! over an `/api`-prefixed axum router.
//!
//! Persistence and spreadsheet sync are injected collaborators
//! ([`submissions::DocumentStore`], [`submissions::SheetPublisher`]) so the
//! service can run against an in-memory store in tests and demos.

pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod submissions;
pub mod telemetry;
