//! # semver-bump
//!
//! A library for validating, comparing, sorting and incrementing semantic versions.
//!
//! Versions follow [SemVer 2.0.0](https://semver.org/) with two tolerant extensions when
//! parsing: a leading `v`/`V` is accepted, and the minor and patch components may be omitted.
//! Versions are always rendered in canonical form.
//!
//! ## Examples
//!
//! Quickly validate or increment a version string:
//!
//! ```
//! use semver_bump::prelude::*;
//!
//! assert_eq!(Ok("1.2.0-beta.5".to_string()), validate("v1.2-beta.5"));
//!
//! let next = increment(
//!   "1.2.3",                // current version string
//!   ReleaseType::PreMinor,  // the kind of release to move to
//!   "rc",                   // prerelease track, or "" for none
//! ).unwrap();
//! assert_eq!(next, "1.3.0-rc.0");
//! ```
//!
//! Or work with parsed [`Version`]s:
//!
//! ```
//! use semver_bump::prelude::*;
//!
//! let version: Version = "1.3.0-rc.0".parse().unwrap();
//! let next = version.next(ReleaseType::PreRelease, None).unwrap();
//! assert_eq!("1.3.0-rc.1", next.to_string());
//! assert!(next > version);
//! ```
//!
//! Pick the valid versions out of a noisy list, such as repository tags:
//!
//! ```
//! use semver_bump::prelude::*;
//!
//! let tags = ["v0.1.0", "release-candidate", "0.1.1-beta.0", "0.1.0-alpha.01"];
//! assert_eq!(vec!["0.1.0", "0.1.1-beta.0"], sorted_valid(tags));
//! ```
//!
//! ## Release Types
//!
//! | Release type | `1.2.3` | `1.2.0-rc.1` | `1.0.0-rc.1` |
//! |---|---|---|---|
//! | `major` | `2.0.0` | `2.0.0` | `1.0.0` |
//! | `minor` | `1.3.0` | `1.2.0` | `1.0.0` |
//! | `patch` | `1.2.4` | `1.2.1` | `1.0.1` |
//! | `premajor` | `2.0.0-0` | `2.0.0-0` | `2.0.0-0` |
//! | `preminor` | `1.3.0-0` | `1.3.0-0` | `1.1.0-0` |
//! | `prepatch` | `1.2.4-0` | `1.2.1-0` | `1.0.1-0` |
//! | `prerelease` | `1.2.4-0` | `1.2.0-rc.2` | `1.0.0-rc.2` |
//!
//! `major` and `minor` *collapse* a prerelease that already sits on the target release, so it
//! becomes that release instead of skipping past it.
//!
//! With a prerelease track (e.g. `dev`), the `pre*` types produce `<track>.0`, and
//! `prerelease` bumps the counter of a version already on that track (`1.2.0-dev.4` to
//! `1.2.0-dev.5`).
//!
//! ## Prelude
//!
//! semver-bump provides a prelude module for convenience. It contains everything needed to
//! interact with the library.
//!
//! Use it with:
//!
//! ```
//! use semver_bump::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
pub mod git;
mod identifier;
mod increment;
mod list;
mod ops;
mod release;
mod version;

pub use crate::error::{ReleaseTypeError, TagsError, VersionError};
pub use crate::identifier::Identifier;
pub use crate::list::{filter_valid, latest, parse_valid, sorted_valid};
pub use crate::ops::{
    format, increment, major, minor, parse, patch, prerelease_identifiers,
    release_type_from_name, validate,
};
pub use crate::release::ReleaseType;
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use semver_bump::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::filter_valid;
    #[doc(no_inline)]
    pub use crate::increment;
    #[doc(no_inline)]
    pub use crate::latest;
    #[doc(no_inline)]
    pub use crate::sorted_valid;
    #[doc(no_inline)]
    pub use crate::validate;
    #[doc(no_inline)]
    pub use crate::Identifier;
    #[doc(no_inline)]
    pub use crate::ReleaseType;
    #[doc(no_inline)]
    pub use crate::ReleaseTypeError;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
