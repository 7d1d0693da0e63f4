//! Data models for FFBot

mod conversation;
mod menu;
mod profile;

pub use conversation::*;
pub use menu::*;
pub use profile::*;
