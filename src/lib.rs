pub mod error;
pub mod layer;
pub mod math;
pub mod operations;
pub mod outline;
pub mod selection;
pub mod session;

pub use error::{GlyphexError, Result};
