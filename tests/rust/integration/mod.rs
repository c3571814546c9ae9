//! Integration tests - cross-module behaviour of the public builder API
//!
//! These tests go through the crate's public surface only: patterns, condition
//! trees, clauses and the assembled query.

mod condition_tests;
mod document_tests;
mod parameter_tests;
mod pattern_tests;
mod query_assembly_tests;
