//! InMemory 実装

pub mod table;

pub use table::InMemoryTable;
