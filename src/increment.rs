//! The increment state machine.
//!
//! Every [`ReleaseType`] is planned as two phases applied in order:
//!
//! 1. a [`Core`] transition of `major.minor.patch`, and then
//! 2. a [`Step`] deciding the prerelease: either drop it, or bump its counter.
//!
//! The counter bump ([`Step::Pre`]) is private to this module, so it cannot be requested by
//! callers directly.

use crate::{error::VersionError, identifier::Identifier, release::ReleaseType, version::Version};
use tracing::trace;

/// First phase: what happens to the version core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Core {
    /// Leave the core as is. Used to collapse a prerelease into its release.
    Keep,
    Major,
    Minor,
    Patch,
}

/// Second phase: what happens to the prerelease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Drop the prerelease, producing a release.
    Release,
    /// Bump the prerelease counter, optionally on a named track.
    Pre,
}

fn plan(version: &Version, release_type: ReleaseType) -> (Core, Step) {
    let is_pre = version.is_prerelease();

    match release_type {
        // 1.0.0-5 is already a pre-major of 1.0.0, 1.1.0 is not
        ReleaseType::Major if is_pre && version.minor() == 0 && version.patch() == 0 => {
            (Core::Keep, Step::Release)
        }
        ReleaseType::Major => (Core::Major, Step::Release),
        // 1.2.0-5 is already a pre-minor of 1.2.0, 1.2.1 is not
        ReleaseType::Minor if is_pre && version.patch() == 0 => (Core::Keep, Step::Release),
        ReleaseType::Minor => (Core::Minor, Step::Release),
        ReleaseType::Patch => (Core::Patch, Step::Release),
        // the pre-variants bump unconditionally, even from an already pre-bumped core
        ReleaseType::PreMajor => (Core::Major, Step::Pre),
        ReleaseType::PreMinor => (Core::Minor, Step::Pre),
        ReleaseType::PrePatch => (Core::Patch, Step::Pre),
        ReleaseType::PreRelease if is_pre => (Core::Keep, Step::Pre),
        ReleaseType::PreRelease => (Core::Patch, Step::Pre),
    }
}

fn incremented(value: u64, version: &Version, part: &'static str) -> Result<u64, VersionError> {
    value
        .checked_add(1)
        .ok_or_else(|| VersionError::IncrementOverflow {
            version: version.to_string(),
            part,
        })
}

impl Core {
    /// Applies the core transition. The prerelease and build metadata survive only when the core
    /// is kept.
    fn apply(self, version: &Version) -> Result<Version, VersionError> {
        let (major, minor, patch) = (version.major(), version.minor(), version.patch());

        Ok(match self {
            Core::Keep => version.clone(),
            Core::Major => Version::new(incremented(major, version, "major")?, 0, 0),
            Core::Minor => Version::new(major, incremented(minor, version, "minor")?, 0),
            Core::Patch => Version::new(major, minor, incremented(patch, version, "patch")?),
        })
    }
}

impl Step {
    fn apply(self, version: Version, track: Option<&Identifier>) -> Result<Version, VersionError> {
        match self {
            Step::Release => Ok(version.with_prerelease(Vec::new()).with_build(Vec::new())),
            // only the prerelease is rewritten, build metadata is left as is
            Step::Pre => {
                let prerelease = bump_prerelease(&version, track)?;
                Ok(version.with_prerelease(prerelease))
            }
        }
    }
}

/// Bumps the rightmost numeric identifier, or appends a `0` if there is none.
fn bump_counter(version: &Version) -> Result<Vec<Identifier>, VersionError> {
    let mut prerelease = version.prerelease().to_vec();

    match prerelease.iter_mut().rev().find(|ident| ident.is_numeric()) {
        Some(Identifier::Numeric(n)) => *n = incremented(*n, version, "prerelease")?,
        _ => prerelease.push(Identifier::Numeric(0)),
    }

    Ok(prerelease)
}

/// Computes the prerelease after a counter bump.
///
/// Without a track, the rightmost numeric identifier is bumped (`alpha.9.beta` becomes
/// `alpha.10.beta`), or `0` is appended if there is none.
///
/// With a track, a prerelease of the form `<track>.<number>[...]` has that number bumped and the
/// rest kept. Anything else restarts the track at `<track>.0`.
fn bump_prerelease(
    version: &Version,
    track: Option<&Identifier>,
) -> Result<Vec<Identifier>, VersionError> {
    let Some(track) = track else {
        return bump_counter(version);
    };

    match version.prerelease() {
        [first, Identifier::Numeric(counter), rest @ ..] if first == track => {
            let mut prerelease = Vec::with_capacity(rest.len() + 2);
            prerelease.push(first.clone());
            prerelease.push(Identifier::Numeric(incremented(
                *counter,
                version,
                "prerelease",
            )?));
            prerelease.extend_from_slice(rest);
            Ok(prerelease)
        }
        _ => Ok(vec![track.clone(), Identifier::Numeric(0)]),
    }
}

impl Version {
    /// Returns the version that follows this one for the given [`ReleaseType`].
    ///
    /// `track` names a prerelease track (such as `alpha` or `dev`) for the `Pre*` release
    /// types. It is ignored by [`Major`](ReleaseType::Major), [`Minor`](ReleaseType::Minor) and
    /// [`Patch`](ReleaseType::Patch).
    ///
    /// Build metadata is kept only by [`PreRelease`](ReleaseType::PreRelease) on a version that
    /// already is a prerelease, since only its prerelease is rewritten. Every other increment
    /// produces a version without build metadata.
    ///
    /// ```
    /// use semver_bump::{Identifier, ReleaseType, Version};
    ///
    /// let version: Version = "1.2.3".parse().unwrap();
    /// assert_eq!("2.0.0", version.next(ReleaseType::Major, None).unwrap().to_string());
    ///
    /// let dev: Identifier = "dev".parse().unwrap();
    /// let next = version.next(ReleaseType::PreMinor, Some(&dev)).unwrap();
    /// assert_eq!("1.3.0-dev.0", next.to_string());
    ///
    /// let next = next.next(ReleaseType::PreRelease, Some(&dev)).unwrap();
    /// assert_eq!("1.3.0-dev.1", next.to_string());
    ///
    /// // a pre-minor collapses into its release
    /// assert_eq!("1.3.0", next.next(ReleaseType::Minor, None).unwrap().to_string());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::IncrementOverflow`] if a component or prerelease counter is
    /// already `u64::MAX`.
    pub fn next(
        &self,
        release_type: ReleaseType,
        track: Option<&Identifier>,
    ) -> Result<Version, VersionError> {
        let (core, step) = plan(self, release_type);
        trace!(version = %self, %release_type, ?core, ?step, "planned increment");

        let intermediate = core.apply(self)?;
        step.apply(intermediate, track)
    }
}
