//! Error types and result extensions for bdev-frames operations

mod builders;
mod extensions;
mod types;

pub use builders::*;
pub use extensions::*;
pub use types::{Error, Result};
