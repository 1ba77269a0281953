//! CLI command implementations

pub mod inspect;
pub mod read;
pub mod strip;
pub mod write;
