//! Core types and configuration for podship.
//!
//! This crate defines the `podship.toml` schema ([`PodshipConfig`]),
//! the image reference pushed to the registry ([`ImageRef`]), and shared
//! error types.

pub mod config;
pub mod error;
pub mod image;

pub use config::{EngineConfig, GitConfig, ImageConfig, PodshipConfig};
pub use error::{Error, Result};
pub use image::ImageRef;
