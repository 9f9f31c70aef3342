//! Search Service Module
//!
//! The component responsible for executing user queries against the loaded
//! standards dataset.
//!
//! ## Overview
//! This module bridges the HTTP API layer with the in-memory dataset. There
//! is no index: the dataset is a few thousand rows at most, and a linear
//! case-insensitive substring scan is the whole retrieval story.
//!
//! ## Responsibilities
//! - **Filtering**: Matching records against a free-text query and the exact
//!   section/source dimensions.
//! - **API**: Exposing the two read-only endpoints via the Axum web server.
//!
//! ## Submodules
//! - **`engine`**: The substring filter logic.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;
