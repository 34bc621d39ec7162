//! One-shot operations on raw version strings.
//!
//! Each function parses its input, does one thing, and returns plain values. All of them are
//! strict: a malformed input is returned as an error, never coerced.

use crate::{
    error::{ReleaseTypeError, VersionError},
    identifier::Identifier,
    release::ReleaseType,
    version::Version,
};

/// Parses a version string. Same as [`Version::parse`].
pub fn parse(raw: &str) -> Result<Version, VersionError> {
    Version::parse(raw)
}

/// Renders a version in canonical form. Same as [`Version::to_string`].
pub fn format(version: &Version) -> String {
    version.to_string()
}

/// Checks a version string and returns it in canonical form.
///
/// ```
/// use semver_bump::validate;
///
/// assert_eq!(Ok("1.2.0".to_string()), validate("v1.2"));
/// assert!(validate("1.2.3.4").is_err());
/// ```
pub fn validate(raw: &str) -> Result<String, VersionError> {
    parse(raw).map(|version| format(&version))
}

/// Returns the major component of a version string.
pub fn major(raw: &str) -> Result<u64, VersionError> {
    parse(raw).map(|version| version.major())
}

/// Returns the minor component of a version string.
pub fn minor(raw: &str) -> Result<u64, VersionError> {
    parse(raw).map(|version| version.minor())
}

/// Returns the patch component of a version string.
pub fn patch(raw: &str) -> Result<u64, VersionError> {
    parse(raw).map(|version| version.patch())
}

/// Returns the prerelease identifiers of a version string, empty if it has no prerelease.
pub fn prerelease_identifiers(raw: &str) -> Result<Vec<String>, VersionError> {
    parse(raw).map(|version| version.prerelease().iter().map(Identifier::to_string).collect())
}

/// Looks up a [`ReleaseType`] by name. Same as [`ReleaseType::from_str`](std::str::FromStr).
pub fn release_type_from_name(name: &str) -> Result<ReleaseType, ReleaseTypeError> {
    name.parse()
}

/// Increments a version string and returns the result in canonical form.
///
/// An empty `identifier` means no prerelease track. See [`Version::next`] for the rules.
///
/// The track must be a single prerelease identifier. Dotted tracks such as `a.b` are rejected
/// rather than spliced into the prerelease, since they could never be matched again by a later
/// `prerelease` increment. Earlier `semver` tools accepted them and produced `1.2.4-a.b.0`.
///
/// ```
/// use semver_bump::{increment, ReleaseType};
///
/// assert_eq!(Ok("1.2.0".to_string()), increment("1.2.0-5", ReleaseType::Minor, ""));
/// assert_eq!(
///     Ok("1.2.3-alpha.10.beta".to_string()),
///     increment("1.2.3-alpha.9.beta", ReleaseType::PreRelease, "")
/// );
/// assert_eq!(
///     Ok("1.2.3-dev.0".to_string()),
///     increment("1.2.3-dev.bar", ReleaseType::PreRelease, "dev")
/// );
/// ```
///
/// # Errors
///
/// - Returns the parse error if `raw` is not a valid version.
/// - Returns [`VersionError::InvalidPrereleaseTrack`] if `identifier` is not empty and not a
///   single valid prerelease identifier, such as `a.b` or `01`.
/// - Returns [`VersionError::IncrementOverflow`] if a value to increment is `u64::MAX`.
pub fn increment(
    raw: &str,
    release_type: ReleaseType,
    identifier: &str,
) -> Result<String, VersionError> {
    let version = parse(raw)?;
    let track = if identifier.is_empty() {
        None
    } else {
        Some(identifier.parse::<Identifier>()?)
    };
    version
        .next(release_type, track.as_ref())
        .map(|next| format(&next))
}
