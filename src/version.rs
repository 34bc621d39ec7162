use crate::{
    error::VersionError,
    identifier::{self, Identifier},
};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

const CORE_COMPONENTS: [&str; 3] = ["major", "minor", "patch"];

/// A Version is a parsed semantic version: a `major.minor.patch` core, an optional prerelease
/// (a sequence of [`Identifier`]s) and optional build metadata.
///
/// Versions are created by [parsing](Version::from_str) a version string or with
/// [`Version::new`]. They can be [displayed](Version::to_string) in canonical form,
/// [incremented](Version::next), and compared.
///
/// The parser is more tolerant than the canonical form it renders:
///
/// - a single leading `v` or `V` is accepted and dropped,
/// - the minor and patch components may be omitted and default to `0`.
///
/// ```
/// use semver_bump::Version;
///
/// let version: Version = "v1.2-beta.5+exp.sha.5114f85".parse().unwrap();
/// assert_eq!(1, version.major());
/// assert_eq!(0, version.patch());
/// assert_eq!("1.2.0-beta.5+exp.sha.5114f85", version.to_string());
/// ```
///
/// Equality and ordering follow SemVer precedence, so build metadata is ignored by both. Use
/// [`Version::is_identical`] to also compare build metadata.
///
/// ```
/// use semver_bump::Version;
///
/// let a: Version = "1.0.0-alpha+001".parse().unwrap();
/// let b: Version = "1.0.0-alpha+002".parse().unwrap();
/// assert_eq!(a, b);
/// assert!(!a.is_identical(&b));
/// assert!(a < "1.0.0".parse::<Version>().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<Identifier>,
    build: Vec<String>,
}

impl Version {
    /// Returns a new release version with no prerelease or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    pub(crate) fn with_prerelease(mut self, prerelease: Vec<Identifier>) -> Self {
        self.prerelease = prerelease;
        self
    }

    pub(crate) fn with_build(mut self, build: Vec<String>) -> Self {
        self.build = build;
        self
    }

    /// The major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch component.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The prerelease identifiers. Empty for a release version.
    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    /// The build metadata identifiers. Empty if there is no build metadata.
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Returns true if this version has a prerelease.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Returns true if both versions are the same in every part, build metadata included.
    pub fn is_identical(&self, other: &Self) -> bool {
        self == other && self.build == other.build
    }

    /// Parses a version string.
    ///
    /// # Errors
    ///
    /// Returns a [`VersionError`] describing the first problem found. Nothing is coerced: any
    /// character outside of the grammar (whitespace included) is an error.
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        let unprefixed = version_str
            .strip_prefix(&['v', 'V'][..])
            .unwrap_or(version_str);
        if unprefixed.is_empty() {
            return Err(VersionError::Empty);
        }

        // the core never contains `-` or `+`, so the first of each starts its field
        let (rest, build) = match unprefixed.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (unprefixed, None),
        };
        let (core, prerelease) = match rest.split_once('-') {
            Some((core, prerelease)) => (core, Some(prerelease)),
            None => (rest, None),
        };

        let [major, minor, patch] = parse_core(core, version_str)?;

        let prerelease = match prerelease {
            Some(field) => field
                .split('.')
                .map(|token| Identifier::parse_prerelease(token, version_str))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let build = match build {
            Some(field) => field
                .split('.')
                .map(|token| identifier::parse_build(token, version_str))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    /// Compares two versions by SemVer precedence.
    ///
    /// 1. `major`, `minor` and `patch` are compared numerically, in that order.
    /// 2. With equal cores, a release is greater than any of its prereleases.
    /// 3. Prereleases are compared identifier by identifier (see [`Identifier`]); if one is a
    ///    prefix of the other, the shorter one is lesser.
    ///
    /// Build metadata plays no part.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| {
                match (self.prerelease.is_empty(), other.prerelease.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    // slice ordering already puts a strict prefix first
                    (false, false) => self.prerelease.cmp(&other.prerelease),
                }
            })
    }
}

fn parse_core(core: &str, version_str: &str) -> Result<[u64; 3], VersionError> {
    let parts: Vec<&str> = core.split('.').collect();

    let all_digits = parts
        .iter()
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    if !all_digits {
        return Err(VersionError::InvalidCore {
            version: version_str.to_owned(),
        });
    }
    if parts.len() > CORE_COMPONENTS.len() {
        return Err(VersionError::TooManyCoreComponents {
            version: version_str.to_owned(),
            count: parts.len(),
        });
    }

    let mut values = [0u64; 3];
    for (idx, part) in parts.iter().enumerate() {
        // leading zeros are tolerated in the core, only the value is kept
        values[idx] = part.parse().map_err(|_| VersionError::CoreOverflow {
            version: version_str.to_owned(),
            component: CORE_COMPONENTS[idx],
        })?;
    }
    Ok(values)
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_precedence(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
    }
}

impl Display for Version {
    /// Renders the canonical form: no `v` prefix, always three core components, and the
    /// prerelease and build fields only when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        for (idx, ident) in self.prerelease.iter().enumerate() {
            f.write_str(if idx == 0 { "-" } else { "." })?;
            write!(f, "{ident}")?;
        }

        for (idx, ident) in self.build.iter().enumerate() {
            f.write_str(if idx == 0 { "+" } else { "." })?;
            f.write_str(ident)?;
        }

        Ok(())
    }
}
