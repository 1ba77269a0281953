//! # Capimg Core
//!
//! A streaming JPEG segment-level codec that reads and rewrites the XMP
//! description packet embedded in a JPEG's APP1 marker segment, without
//! decoding or re-encoding pixel data.
//!
//! ## Modules
//!
//! - `constants`: JPEG marker codes, the XMP identifier, and limits
//! - `types`: Outcome types (ReadOutcome, WriteOutcome, SegmentInfo)
//! - `error`: Structural failure taxonomy
//! - `walker`: Marker segment walker (locate/insert/remove XMP APP1)
//! - `packet`: XMP packet builder and description extractor
//! - `description`: High-level read/write composition
//!
//! Rewrites preserve every non-XMP segment byte-for-byte; the new XMP
//! segment is always inserted immediately after SOI and all pre-existing
//! XMP segments are dropped, so exactly one survives.

#![warn(missing_docs)]

pub mod constants;
pub mod description;
pub mod error;
pub mod packet;
pub mod types;
pub mod walker;

// Re-export commonly used items
pub use description::{read_description, write_description};
pub use error::XmpError;
pub use types::{ReadOutcome, SegmentInfo, WriteOutcome};

/// Result type alias for capimg operations
pub type Result<T> = core::result::Result<T, XmpError>;
