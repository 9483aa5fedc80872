//! Data models for the jukebox
//!
//! Plain value types shared by the catalog, the service and the HTTP layer.

mod album;
mod charge;
mod page;
mod track;

pub use album::Album;
pub use charge::Charge;
pub use page::Page;
pub use track::Track;
