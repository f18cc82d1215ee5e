//! Card document parsing and loading.
//!
//! ## Key Functions
//!
//! - [`load_repository`] / [`parse_repository`]: lenient startup loading
//! - [`parse_replacement`]: strict validation of a user-supplied dataset

pub mod loader;

pub use loader::{load_repository, parse_replacement, parse_repository};
