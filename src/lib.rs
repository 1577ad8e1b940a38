pub mod backup;
pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{update, update_value, VersionRepr, VersionUpdate, VersionUpdateRequest};
pub use error::{NumbumpError, Result};
