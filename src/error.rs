use std::path::PathBuf;

/// Errors that occur when parsing or incrementing a version.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum VersionError {
    /// The version string was empty (or only a `v` prefix).
    #[error("Version string should not be empty")]
    Empty,

    /// The major/minor/patch part of the version string is not made of dot-separated integers.
    #[error("Version core of `{version}` should be 1 to 3 dot-separated non-negative integers")]
    InvalidCore {
        /// The version string being parsed
        version: String,
    },

    /// The version core has four or more numeric components.
    #[error("Version `{version}` should have at most 3 core components, but has {count}")]
    TooManyCoreComponents {
        /// The version string being parsed
        version: String,
        /// How many components were found
        count: usize,
    },

    /// A version core component does not fit in a `u64`.
    #[error("The {component} component of `{version}` should fit in an unsigned 64-bit integer")]
    CoreOverflow {
        /// The version string being parsed
        version: String,
        /// One of `major`, `minor` or `patch`
        component: &'static str,
    },

    /// A prerelease or build field contains an empty identifier, such as `1.2.3-alpha..1`.
    #[error("The {field} of `{version}` should not contain empty identifiers")]
    EmptyIdentifier {
        /// The version string being parsed
        version: String,
        /// Either `prerelease` or `build metadata`
        field: &'static str,
    },

    /// An identifier contains a character outside of `[0-9A-Za-z-]`.
    #[error("Identifier `{identifier}` in `{version}` should only contain ASCII alphanumerics and hyphens")]
    InvalidIdentifier {
        /// The version string being parsed
        version: String,
        /// The offending identifier
        identifier: String,
    },

    /// A numeric prerelease identifier has a leading zero, such as `01`.
    #[error("Numeric prerelease identifier `{identifier}` in `{version}` should not have leading zeros")]
    LeadingZero {
        /// The version string being parsed
        version: String,
        /// The offending identifier
        identifier: String,
    },

    /// A numeric prerelease identifier does not fit in a `u64`.
    #[error("Numeric prerelease identifier `{identifier}` in `{version}` should fit in an unsigned 64-bit integer")]
    IdentifierOverflow {
        /// The version string being parsed
        version: String,
        /// The offending identifier
        identifier: String,
    },

    /// The prerelease track passed to an increment is not a valid prerelease identifier.
    #[error("Prerelease track `{track}` should be a single valid prerelease identifier")]
    InvalidPrereleaseTrack {
        /// The rejected track
        track: String,
    },

    /// Incrementing a value would overflow a `u64`.
    #[error("Incrementing the {part} of `{version}` would overflow")]
    IncrementOverflow {
        /// The version being incremented
        version: String,
        /// What was being incremented: `major`, `minor`, `patch` or `prerelease`
        part: &'static str,
    },
}

/// Errors that occur when looking up a [`ReleaseType`](crate::ReleaseType) by name.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ReleaseTypeError {
    /// The name does not match any release type.
    #[error("Unknown release type `{name}`, should be one of: major, minor, patch, premajor, preminor, prepatch, prerelease")]
    Unknown {
        /// The name that was looked up
        name: String,
    },

    /// The name matches a release type that is for internal use only.
    #[error("Release type `{name}` is for internal use only")]
    InternalOnly {
        /// The name that was looked up
        name: String,
    },
}

/// Errors that occur when reading versions from the tags of a git repository.
#[derive(thiserror::Error, Debug)]
pub enum TagsError {
    /// The path to search from could not be read.
    #[error("Could not read `{}`: {source}", path.display())]
    Io {
        /// The path that was being read
        path: PathBuf,
        /// The underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// No repository could be found, or its tags could not be read.
    #[error(transparent)]
    Git(#[from] git2::Error),
}
