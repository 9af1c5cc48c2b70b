//! Core of the compose updater: walks the running containers on a host and
//! refreshes the compose stack inside each one when newer images exist.

pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, UpdaterError};
