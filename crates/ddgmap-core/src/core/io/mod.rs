//! Line-oriented I/O for the flat text formats exchanged with the Rosetta
//! Flex ddG and MutateX tooling.
//!
//! Readers take any `BufRead` so they stay testable without touching the
//! filesystem; `_path` convenience wrappers handle the file plumbing.

pub mod mutinfo;
pub mod position_list;
