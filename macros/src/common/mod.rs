// Common utilities for the user-facing macros
//
// This module contains:
// - parse_utils: `#[host(...)]` helper attribute parsing
// - signature: function signature / return shape model

mod parse_utils;
pub mod signature;

pub use parse_utils::*;
pub use signature::*;
