//! Seismic detection message schemas.
//!
//! This crate provides typed records for detection messages exchanged as
//! JSON, each implementing [`detection_canonical::Record`]:
//! - [`Hypocenter`]: location and origin time estimate
//! - [`Source`]: agency and author attribution
//! - [`Retract`]: withdrawal of a previous message, embedding a [`Source`]
//!
//! ```rust
//! use detection_canonical::Record;
//! use detection_schemas::Retract;
//!
//! let (retract, report) = Retract::from_json(
//!     r#"{"Type":"Retract","ID":"abc123","Source":{"AgencyID":"US","Author":"TestAuthor"}}"#,
//! );
//! assert!(report.is_ok());
//! assert!(retract.is_valid());
//! ```

#![deny(missing_docs)]

pub mod hypocenter;
pub mod message;
pub mod retract;
pub mod source;

pub use hypocenter::Hypocenter;
pub use message::{Message, MessageKind, UnknownKind};
pub use retract::Retract;
pub use source::Source;
