//! Fosdelta: Fossil-format binary delta encoding/decoding in Rust.
//!
//! The crate provides:
//! - Delta creation, application, and size prediction ([`create`],
//!   [`apply`], [`output_size`])
//! - The wire-format building blocks (`format`)
//! - The rolling hash and landmark index behind the matcher (`hash`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! let source = b"hello old world";
//! let target = b"hello new world";
//!
//! let delta = fosdelta::create(source, target);
//! let restored = fosdelta::apply(source, &delta, true).unwrap();
//! assert_eq!(restored, target);
//! assert_eq!(fosdelta::output_size(&delta).unwrap(), target.len());
//! ```

pub mod checksum;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod hash;
pub mod io;

#[cfg(feature = "cli")]
pub mod cli;

pub use decoder::{apply, output_size};
pub use encoder::create;
pub use error::DeltaError;
