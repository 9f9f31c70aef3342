//! Cybersecurity Standards Search Service Library
//!
//! This library crate defines the core modules behind the standards API server.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of two loosely coupled subsystems:
//!
//! - **`dataset`**: The data layer. Loads the spreadsheet-derived CSV exports,
//!   cleans and de-duplicates rows, and precomputes the section/source filter
//!   option lists served to the front end.
//! - **`search`**: The query layer. Contains the substring filter engine and
//!   the HTTP handlers for the two read-only API endpoints.

pub mod dataset;
pub mod search;
