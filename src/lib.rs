//! Workspace-level integration tests for RootCalc-rs.
//!
//! The tests live in `tests/`; this crate has no code of its own.
