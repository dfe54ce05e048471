pub mod career;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod schema;
pub mod store;
pub mod sync;

pub use cli::{Cli, Commands};
pub use error::{Result, SyncError};
