//! Client Integration Tests
//!
//! Drives [`zeondb::Session`] against an in-memory engine that speaks the
//! command grammar:
//! - Full sessions: login, data, branches, templates, accounts
//! - Error surfaces: engine failures, protocol violations, validation
//! - Handle lifecycle and independent sessions

mod common;

mod errors;
mod scenario;
