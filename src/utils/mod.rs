//! Utility modules for the jukebox

pub mod durations;
pub mod threading;
