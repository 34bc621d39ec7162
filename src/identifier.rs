use crate::error::VersionError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A single dot-separated token of a version's prerelease field.
///
/// Identifiers made only of digits are [`Numeric`](Identifier::Numeric) and compare by value.
/// Everything else is [`Alphanumeric`](Identifier::Alphanumeric) and compares by ASCII byte
/// order. A numeric identifier always has lower precedence than an alphanumeric one.
///
/// ```
/// use semver_bump::Identifier;
///
/// let nine: Identifier = "9".parse().unwrap();
/// let ten: Identifier = "10".parse().unwrap();
/// let alpha: Identifier = "alpha".parse().unwrap();
/// assert!(nine < ten);
/// assert!(ten < alpha);
/// ```
// variant order matters: the derived ordering puts every Numeric before every Alphanumeric
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    /// An all-digit identifier without leading zeros (other than `0` itself).
    Numeric(u64),
    /// Any other identifier, such as `alpha`, `rc1` or `-1`.
    Alphanumeric(String),
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

impl Identifier {
    /// Parses one prerelease identifier. `version` is only used to give errors context.
    pub(crate) fn parse_prerelease(token: &str, version: &str) -> Result<Self, VersionError> {
        check_token(token, version, "prerelease")?;

        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Identifier::Alphanumeric(token.to_owned()));
        }

        if token.len() > 1 && token.starts_with('0') {
            return Err(VersionError::LeadingZero {
                version: version.to_owned(),
                identifier: token.to_owned(),
            });
        }

        token
            .parse::<u64>()
            .map(Identifier::Numeric)
            .map_err(|_| VersionError::IdentifierOverflow {
                version: version.to_owned(),
                identifier: token.to_owned(),
            })
    }

    /// Returns true if this is a [`Numeric`](Identifier::Numeric) identifier.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

/// Checks a build metadata identifier. These follow the prerelease grammar, but leading zeros
/// are allowed and they are kept as opaque text.
pub(crate) fn parse_build(token: &str, version: &str) -> Result<String, VersionError> {
    check_token(token, version, "build metadata")?;
    Ok(token.to_owned())
}

fn check_token(token: &str, version: &str, field: &'static str) -> Result<(), VersionError> {
    if token.is_empty() {
        return Err(VersionError::EmptyIdentifier {
            version: version.to_owned(),
            field,
        });
    }
    if !token.bytes().all(is_identifier_byte) {
        return Err(VersionError::InvalidIdentifier {
            version: version.to_owned(),
            identifier: token.to_owned(),
        });
    }
    Ok(())
}

impl FromStr for Identifier {
    type Err = VersionError;

    /// Parses a standalone prerelease identifier, such as a prerelease track name.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::InvalidPrereleaseTrack`] if `s` is empty, contains a character
    /// outside of `[0-9A-Za-z-]` (including `.`), or is numeric with a leading zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::parse_prerelease(s, s).map_err(|_| VersionError::InvalidPrereleaseTrack {
            track: s.to_owned(),
        })
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{n}"),
            Identifier::Alphanumeric(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Identifier::Numeric(0))]
    #[case("10", Identifier::Numeric(10))]
    #[case("18446744073709551615", Identifier::Numeric(u64::MAX))]
    #[case("alpha", Identifier::Alphanumeric("alpha".to_string()))]
    #[case("-1", Identifier::Alphanumeric("-1".to_string()))]
    #[case("rc1-with-hyphen", Identifier::Alphanumeric("rc1-with-hyphen".to_string()))]
    #[case("0a", Identifier::Alphanumeric("0a".to_string()))]
    fn test_parse_prerelease_ok(#[case] token: &str, #[case] expected: Identifier) {
        assert_eq!(Ok(expected), Identifier::parse_prerelease(token, "1.2.3"));
    }

    #[test]
    fn test_parse_prerelease_err() {
        use VersionError::*;

        let args = [
            (
                "",
                EmptyIdentifier {
                    version: "v".to_string(),
                    field: "prerelease",
                },
            ),
            (
                "01",
                LeadingZero {
                    version: "v".to_string(),
                    identifier: "01".to_string(),
                },
            ),
            (
                "al_pha",
                InvalidIdentifier {
                    version: "v".to_string(),
                    identifier: "al_pha".to_string(),
                },
            ),
            (
                "18446744073709551616",
                IdentifierOverflow {
                    version: "v".to_string(),
                    identifier: "18446744073709551616".to_string(),
                },
            ),
        ];

        for (token, err) in args {
            assert_eq!(Err(err), Identifier::parse_prerelease(token, "v"));
        }
    }

    #[test]
    fn test_build_allows_leading_zero() {
        assert_eq!(Ok("01".to_string()), parse_build("01", "1.2.3+01"));
        assert!(parse_build("", "1.2.3+").is_err());
        assert!(parse_build("a b", "1.2.3+a b").is_err());
    }

    #[test]
    fn test_ordering() {
        let ordered = ["0", "1", "9", "10", "99999", "-", "A", "Z", "a", "alpha", "beta"]
            .map(|s| s.parse::<Identifier>().unwrap());

        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1], "{} should be less than {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_from_str_track() {
        assert_eq!(
            Ok(Identifier::Alphanumeric("dev".to_string())),
            "dev".parse()
        );
        assert_eq!(
            Err(VersionError::InvalidPrereleaseTrack {
                track: "dev.1".to_string()
            }),
            "dev.1".parse::<Identifier>()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("42", Identifier::Numeric(42).to_string());
        assert_eq!("beta", Identifier::Alphanumeric("beta".to_string()).to_string());
    }
}
