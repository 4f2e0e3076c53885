//! Android build-variant configuration for Noir Journal
//!
//! This crate decides how a release build of the Noir Journal Android app
//! gets packaged:
//!
//! - **Properties parsing**: the optional `key.properties` secrets file
//! - **Signing resolution**: all-or-nothing release signing credentials
//! - **Build configuration**: an immutable, validated value handed to the
//!   packaging pipeline
//!
//! Local and debug builds have no `key.properties` at all; that is the
//! normal case and never an error. When a `storeFile` is configured, the
//! credentials must be complete and the keystore must exist on disk — a
//! release is never silently packaged unsigned when the operator clearly
//! intended signing.
//!
//! # Example
//!
//! ```rust,no_run
//! use noir_buildconfig::resolver::{self, ProjectSettings};
//! use std::path::Path;
//!
//! let settings = ProjectSettings::default();
//! let config = resolver::resolve(&settings, Path::new("android/key.properties"))
//!     .expect("invalid signing setup");
//!
//! if config.signing.is_some() {
//!     println!("release signing enabled");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod properties;
pub mod resolver;
pub mod signing;

pub use error::{ConfigError, Result};
pub use resolver::{resolve, BuildConfig, ProjectSettings};
pub use signing::SigningCredentials;
