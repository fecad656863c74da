pub mod error;
pub mod generator;
pub mod git;
pub mod io;
pub mod paths;
pub mod pipeline;

pub use error::{PublishError, Result};
