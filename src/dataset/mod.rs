//! Dataset Module
//!
//! The data layer of the standards service. Everything the API serves comes
//! from here: the record type, the CSV loader, and the precomputed filter
//! option lists.
//!
//! ## Overview
//! The original standards database is a multi-sheet workbook, one sheet per
//! standard. This module consumes the CSV export of that workbook: a data
//! directory with one `.csv` file per standard, where the file stem names the
//! Source. Rows are cleaned (spreadsheet artifacts stripped, `nan` cells
//! emptied), run through the column fallback chains, de-duplicated, and held
//! immutably in memory for the lifetime of the process.
//!
//! ## Submodules
//! - **`loader`**: CSV parsing, cell cleaning, de-duplication, and
//!   section/source discovery.
//! - **`types`**: The `StandardRecord` wire type and the loaded `Dataset`.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;
