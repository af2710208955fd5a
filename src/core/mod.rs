//! Core types shared across Lania

pub mod config;
pub mod error;
pub mod options;

pub use error::{LaniaError, LaniaResult};
