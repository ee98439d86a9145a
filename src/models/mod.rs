//! Domain models for RetroStack.
//!
//! # Core Concepts
//!
//! ## Wire Types
//!
//! - [`StackRequest`]: a validated lookup request (language, framework, year,
//!   extras). Built by [`validate_stack_request`] from raw JSON.
//! - [`StackResponse`]: the assembled answer (runtime, package manager, an
//!   ordered list of [`StackPackage`]s, human-readable notes).
//! - [`ErrorResponse`]: the failure document; exactly one of response/error
//!   is produced per request.
//!
//! ## Internal Types
//!
//! - [`VersionEntry`]: one `(version, release_date)` pair of a package's
//!   published history, the unit the version picker operates on.

mod request;
mod response;
mod version;

pub use request::*;
pub use response::*;
pub use version::*;
