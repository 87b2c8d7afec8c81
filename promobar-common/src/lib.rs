//! # Promobar Common Library
//!
//! Shared code for the promobar services including:
//! - Banner settings record and store entry shapes
//! - Banner preview rendering
//! - Common error types

pub mod error;
pub mod preview;
pub mod settings;

pub use error::{Error, Result};
pub use settings::SettingsRecord;
