//! Bringing you closer to your favourite HTTP status dogs.
//!
//! Look up a dog by status code or by status name and get back the
//! description and picture scraped from httpstatusdogs.com.
//!
//! ```no_run
//! let dog = httpdogs::dog_by_name("not found")?;
//! assert_eq!(dog.code, 404);
//! println!("{dog}: {}", dog.description);
//! # Ok::<(), httpdogs::error::DogError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]
#![deny(clippy::all)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::disallowed_methods)]
#![deny(clippy::expect_used)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::panic)]
#![deny(clippy::perf)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(warnings)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod dog;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod names;
pub mod status_codes;

pub use dog::{DogLookup, HttpDog, dog_by_code, dog_by_name};
pub use error::DogError;
