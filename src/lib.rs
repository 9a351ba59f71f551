pub mod changelog;
pub mod cli;
pub mod error;
pub mod forge;
pub mod result;

pub use error::ChangelogError;
pub use result::Result;
