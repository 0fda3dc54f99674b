//! # Core Models Module
//!
//! Data structures shared by every ddgmap operation.
//!
//! ## Key Components
//!
//! - [`token`] - The dot-separated mutation token found in mutinfo records
//! - [`position`] - Structural positions and their MutateX identifiers
//! - [`residue`] - Three-letter to one-letter amino-acid code table
//! - [`span`] - `CHAIN:START-END` residue range selectors

pub mod position;
pub mod residue;
pub mod span;
pub mod token;
