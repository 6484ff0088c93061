pub mod api;
pub mod client;
pub mod config;
pub(crate) mod error;
pub mod mcp;

pub use error::{McpError, Result};
