//! Code tables and bit-string encoding.
//!
//! - Code table: symbol -> prefix code, derived from a tree or built by hand
//! - Codec: text -> bits and back

pub mod code_table;
pub mod codec;

pub use code_table::CodeTable;
pub use codec::{Codec, Encoded};
