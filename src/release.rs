use crate::error::ReleaseTypeError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The name of the raw prerelease-counter step. It is recognized by name lookup only to be
/// refused.
const INTERNAL_PRE: &str = "pre";

/// The kind of transition requested when [incrementing](crate::Version::next) a version.
///
/// The three release levels move a version to a release. The `Pre*` variants move it to a
/// prerelease of the next major/minor/patch, and [`PreRelease`](ReleaseType::PreRelease) bumps
/// the prerelease counter of the current version.
///
/// Look up a release type by name with [`FromStr`]. Lookup is case-insensitive and ignores
/// surrounding whitespace:
///
/// ```
/// use semver_bump::{ReleaseType, ReleaseTypeError};
///
/// assert_eq!(Ok(ReleaseType::PreMinor), " PreMinor ".parse());
/// assert!(matches!(
///     "pre".parse::<ReleaseType>(),
///     Err(ReleaseTypeError::InternalOnly { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    /// `1.2.3` to `2.0.0`, or `1.0.0-rc.1` to `1.0.0`.
    Major,
    /// `1.2.3` to `1.3.0`, or `1.3.0-rc.1` to `1.3.0`.
    Minor,
    /// `1.2.3` to `1.2.4`.
    Patch,
    /// `1.2.3` to `2.0.0-0`.
    PreMajor,
    /// `1.2.3` to `1.3.0-0`.
    PreMinor,
    /// `1.2.3` to `1.2.4-0`.
    PrePatch,
    /// `1.2.3-0` to `1.2.3-1`, or `1.2.3` to `1.2.4-0`.
    PreRelease,
}

impl ReleaseType {
    /// All release types, in declaration order.
    pub const ALL: [ReleaseType; 7] = [
        ReleaseType::Major,
        ReleaseType::Minor,
        ReleaseType::Patch,
        ReleaseType::PreMajor,
        ReleaseType::PreMinor,
        ReleaseType::PrePatch,
        ReleaseType::PreRelease,
    ];

    /// The lower-case name this release type is looked up by.
    pub fn name(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
            ReleaseType::PreMajor => "premajor",
            ReleaseType::PreMinor => "preminor",
            ReleaseType::PrePatch => "prepatch",
            ReleaseType::PreRelease => "prerelease",
        }
    }
}

impl FromStr for ReleaseType {
    type Err = ReleaseTypeError;

    /// # Errors
    ///
    /// - Returns [`ReleaseTypeError::InternalOnly`] for `pre`, the name of the internal
    ///   prerelease-counter step.
    /// - Returns [`ReleaseTypeError::Unknown`] for any other unrecognized name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        if let Some(release_type) = ReleaseType::ALL.iter().find(|rt| rt.name() == name) {
            return Ok(*release_type);
        }

        if name == INTERNAL_PRE {
            Err(ReleaseTypeError::InternalOnly {
                name: s.to_owned(),
            })
        } else {
            Err(ReleaseTypeError::Unknown {
                name: s.to_owned(),
            })
        }
    }
}

impl Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
