//! Core jukebox logic: identifiers, pagination, credit conversion, the
//! service and the playback engine.

pub mod credits;
pub mod ids;
pub mod pagination;
pub mod player;
pub mod service;
pub use service::JukeboxService;
