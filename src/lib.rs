pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod io;
pub mod query;

pub use error::{Result, ToolshedError};
