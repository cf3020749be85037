//! Storage abstractions for service layer
//!
//! File-backed JSON documents used by services that keep their whole state
//! in one small file instead of a database.

pub mod json_document;
