//! Shared helpers for the ndau key tools.

pub mod input;
pub mod logging;

pub use input::{parse_hex_bytes, InputError};
pub use logging::init_tracing;
