//! Best-effort processing of batches of raw version strings.
//!
//! Unlike the rest of the crate, these functions never fail: entries that don't parse are
//! dropped (and logged at `debug` level), so a batch with no valid entries yields an empty
//! result.

use crate::version::Version;
use tracing::debug;

/// Parses every entry, keeping the valid ones in input order.
pub fn parse_valid<I, S>(raws: I) -> Vec<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raws.into_iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            match Version::parse(raw) {
                Ok(version) => Some(version),
                Err(err) => {
                    debug!(raw, %err, "dropping invalid version");
                    None
                }
            }
        })
        .collect()
}

/// Returns the valid entries of `raws` in canonical form, in input order.
///
/// ```
/// use semver_bump::filter_valid;
///
/// let valid = filter_valid(["1.2-5", "1.2.3-alpha.01", "v1", "not a version"]);
/// assert_eq!(vec!["1.2.0-5", "1.0.0"], valid);
/// ```
pub fn filter_valid<I, S>(raws: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_valid(raws).iter().map(Version::to_string).collect()
}

/// Returns the valid entries of `raws` in canonical form, sorted by ascending precedence.
///
/// The sort is stable: entries of equal precedence (differing only in build metadata or a `v`
/// prefix) keep their input order.
///
/// ```
/// use semver_bump::sorted_valid;
///
/// let sorted = sorted_valid(["v4", "1.2-5", "0.2.0", "3.0.1-beta.0", "3.0.1"]);
/// assert_eq!(vec!["0.2.0", "1.2.0-5", "3.0.1-beta.0", "3.0.1", "4.0.0"], sorted);
/// ```
pub fn sorted_valid<I, S>(raws: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versions = parse_valid(raws);
    versions.sort_by(Version::cmp_precedence);
    versions.iter().map(Version::to_string).collect()
}

/// Returns the valid entry of `raws` with the highest precedence. Among equals, the last one in
/// input order wins.
pub fn latest<I, S>(raws: I) -> Option<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versions = parse_valid(raws);
    versions.sort_by(Version::cmp_precedence);
    versions.pop()
}
