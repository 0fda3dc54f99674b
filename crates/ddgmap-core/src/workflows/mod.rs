//! # Workflows Module
//!
//! The user-facing operations of ddgmap. Each workflow is a synchronous,
//! one-shot transformation: callers load the inputs, the workflow produces
//! the derived data plus a report of anything it had to skip, and the caller
//! decides how to present and persist the result.
//!
//! - **Structure Extraction** ([`structure`]) - Derive position entries from
//!   a parsed PDB structure and a set of chain/residue spans.
//! - **Energy-File Partition** ([`heatmap`]) - Split a position list by the
//!   presence of per-position energy files in a data directory.

pub mod heatmap;
pub mod structure;
