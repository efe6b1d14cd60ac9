//! Utilities
//!
//! Error type and filesystem locations shared by storage and the binary.

pub mod error;
pub mod paths;

pub use error::*;
pub use paths::*;
