//! Configuration module for the jukebox
//!
//! Settings structures and how they are loaded.

mod settings;

pub use settings::{LogFormat, Settings};
