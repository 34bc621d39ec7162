use clap::{ArgAction, Parser, Subcommand};
use semver_bump::{
    git, increment, sorted_valid, ReleaseType, ReleaseTypeError, TagsError, VersionError,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("{0}")]
    ReleaseType(#[from] ReleaseTypeError),

    #[error("{0}")]
    Tags(#[from] TagsError),

    #[error("At least one version needs to be provided")]
    NoVersions,

    #[error("Versions are not allowed when specifying a git repository")]
    VersionsWithRepo,
}

const LONG_ABOUT: &str = "\
Validates lists of raw versions and increments the latest one.

Versions can be passed as arguments, read from the tags of a local git repository, or both. \
Invalid versions are silently skipped; the valid ones are printed in canonical form, sorted \
by precedence.";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = LONG_ABOUT)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The versions to validate, sort or increment
    versions: Vec<String>,

    /// Increment the latest valid version by LEVEL: one of major, minor, patch, premajor,
    /// preminor, prepatch or prerelease. Defaults to patch when no LEVEL is given.
    #[arg(short, long, value_name = "LEVEL", num_args = 0..=1, require_equals = true,
          default_missing_value = "patch")]
    increment: Option<String>,

    /// Prerelease track (such as `alpha` or `dev`) for premajor, preminor, prepatch or
    /// prerelease increments.
    #[arg(long, value_name = "ID", default_value = "")]
    preid: String,

    /// Also use the tags of the git repository at PATH as versions. Defaults to the current
    /// directory when no PATH is given.
    #[arg(short, long, value_name = "PATH", num_args = 0..=1, require_equals = true,
          default_missing_value = ".")]
    repo_dir: Option<PathBuf>,

    /// A version to include in the list, for when no valid versions are found. Defaults to
    /// 0.0.0 when no VERSION is given.
    #[arg(short, long, value_name = "VERSION", num_args = 0..=1, require_equals = true,
          default_missing_value = "0.0.0")]
    default: Option<String>,

    /// Only print the latest version
    #[arg(short, long)]
    latest_only: bool,

    /// Log more details to stderr. Repeat for even more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints build information
    Version,
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    versions: Vec<String>,
    repo_dir: Option<PathBuf>,
    default: Option<String>,
    increment: Option<ReleaseType>,
    preid: String,
    latest_only: bool,
}

impl TryFrom<Cli> for Options {
    type Error = CliError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.versions.is_empty() && cli.repo_dir.is_none() {
            return Err(CliError::NoVersions);
        }
        if cli.versions.len() > 1 && cli.repo_dir.is_some() {
            return Err(CliError::VersionsWithRepo);
        }

        let increment = cli
            .increment
            .as_deref()
            .map(str::parse::<ReleaseType>)
            .transpose()?;

        Ok(Self {
            versions: cli.versions,
            repo_dir: cli.repo_dir,
            default: cli.default,
            increment,
            preid: cli.preid,
            latest_only: cli.latest_only,
        })
    }
}

fn build_info() -> String {
    format!(
        "version: {}\ngit hash: {}\nbuilt on: {}\nplatform: {}/{}",
        env!("CARGO_PKG_VERSION"),
        option_env!("SEMVER_GIT_HASH").unwrap_or("none"),
        option_env!("SEMVER_BUILD_DATE").unwrap_or("unknown"),
        std::env::consts::OS,
        std::env::consts::ARCH,
    )
}

/// Returns what to print, if anything.
fn run(options: &Options) -> Result<Option<String>, CliError> {
    let mut candidates: Vec<String> = options.default.iter().cloned().collect();
    candidates.extend(options.versions.iter().cloned());
    if let Some(repo_dir) = &options.repo_dir {
        candidates.extend(git::tags(Some(repo_dir.as_path()))?);
    }

    let valid = sorted_valid(&candidates);
    tracing::info!(
        candidates = candidates.len(),
        valid = valid.len(),
        "collected versions"
    );

    let Some(latest) = valid.last() else {
        return Ok(None);
    };

    let output = match options.increment {
        Some(release_type) => increment(latest, release_type, &options.preid)?,
        None if options.latest_only => latest.clone(),
        None => valid.join(" "),
    };
    Ok(Some(output))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn do_work(cli: Cli) -> Result<Option<String>, CliError> {
    match cli.command {
        Some(Commands::Version) => Ok(Some(build_info())),
        None => run(&Options::try_from(cli)?),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match do_work(cli) {
        Ok(Some(output)) => println!("{output}"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn work(args: &[&str]) -> Result<Option<String>, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("semver").chain(args.iter().copied()))
            .unwrap();
        do_work(cli)
    }

    #[rstest]
    #[case(&["1.2-5", "1.2.3-alpha.01", "v1", "0.2.0", "v3.0.1-beta.0"], "0.2.0 1.0.0 1.2.0-5 3.0.1-beta.0")]
    #[case(&["-l", "1.2-5", "v4", "0.2.0"], "4.0.0")]
    #[case(&["--latest-only", "0.1.0", "0.1.0-rc.1"], "0.1.0")]
    #[case(&["-i", "1.2.3", "1.0.0"], "1.2.4")]
    #[case(&["-i=minor", "1.2.3"], "1.3.0")]
    #[case(&["--increment=MAJOR", "1.2.3"], "2.0.0")]
    #[case(&["-i=prerelease", "--preid", "dev", "1.2.4"], "1.2.5-dev.0")]
    #[case(&["-i=preminor", "--preid=rc", "1.2.3", "garbage"], "1.3.0-rc.0")]
    #[case(&["-d", "nothing-valid"], "0.0.0")]
    #[case(&["-d=1.0.0", "0.9.0"], "0.9.0 1.0.0")]
    #[case(&["-d", "-i", "junk"], "0.0.1")]
    fn test_output(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(Some(expected.to_string()), work(args).unwrap());
    }

    #[test]
    fn test_no_valid_versions_prints_nothing() {
        assert_eq!(None, work(&["foo", "1.2.3.4"]).unwrap());
        assert_eq!(None, work(&["-i=major", "foo"]).unwrap());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(work(&[]), Err(CliError::NoVersions)));
        assert!(matches!(
            work(&["-i=pre", "1.2.3"]),
            Err(CliError::ReleaseType(ReleaseTypeError::InternalOnly { .. }))
        ));
        assert!(matches!(
            work(&["-i=bogus", "1.2.3"]),
            Err(CliError::ReleaseType(ReleaseTypeError::Unknown { .. }))
        ));
        assert!(matches!(
            work(&["-i=prerelease", "--preid=a.b", "1.2.3"]),
            Err(CliError::Version(VersionError::InvalidPrereleaseTrack { .. }))
        ));
        assert!(matches!(
            work(&["-r", "1.0.0", "2.0.0"]),
            Err(CliError::VersionsWithRepo)
        ));
        assert!(matches!(
            work(&["--repo-dir=/definitely/not/a/real/path"]),
            Err(CliError::Tags(TagsError::Io { .. }))
        ));
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from(["semver", "-r=/tmp", "-i", "-l", "v1"]).unwrap();
        let options = Options::try_from(cli).unwrap();
        assert_eq!(
            Options {
                versions: vec!["v1".to_string()],
                repo_dir: Some(PathBuf::from("/tmp")),
                default: None,
                increment: Some(ReleaseType::Patch),
                preid: String::new(),
                latest_only: true,
            },
            options
        );
    }

    #[test]
    fn test_repo_tags() {
        use git2::{Repository, Signature};

        let dir = tempfile::TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let commit_id = repo
            .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
        let commit = repo.find_object(commit_id, None).unwrap();
        let names = [
            "0.0.2",
            "0.1.0-alpha.0.beta",
            "0.1.0-alpha.01",
            "0.1.1-beta.0",
            "v0.0.1",
            "v0.1.0",
        ];
        for name in names {
            repo.tag_lightweight(name, &commit, false).unwrap();
        }

        let repo_arg = format!("--repo-dir={}", dir.path().display());
        assert_eq!(
            Some("0.0.1 0.0.2 0.1.0-alpha.0.beta 0.1.0 0.1.1-beta.0".to_string()),
            work(&[repo_arg.as_str()]).unwrap()
        );
        assert_eq!(
            Some("0.2.0".to_string()),
            work(&[repo_arg.as_str(), "-i=minor"]).unwrap()
        );
    }

    #[test]
    fn test_version_subcommand() {
        let output = work(&["version"]).unwrap().unwrap();
        assert!(output.starts_with(&format!("version: {}", env!("CARGO_PKG_VERSION"))));
    }
}
