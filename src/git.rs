//! Reading candidate versions from the tags of a git repository.

use crate::error::TagsError;
use git2::Repository;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves where to start looking for a repository: the current directory if `path` is
/// `None`, the parent directory if `path` is a file, otherwise `path` itself.
fn start_dir(path: Option<&Path>) -> Result<PathBuf, TagsError> {
    let Some(path) = path else {
        return std::env::current_dir().map_err(|source| TagsError::Io {
            path: PathBuf::from("."),
            source,
        });
    };

    let metadata = path.metadata().map_err(|source| TagsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_file() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            return Ok(parent.to_path_buf());
        }
        return Ok(PathBuf::from("."));
    }
    Ok(path.to_path_buf())
}

/// Returns the short names of all tags (lightweight and annotated) of the git repository that
/// contains `path`, or the current directory if `path` is `None`.
///
/// The repository is discovered from `path` upwards, so any directory inside a work tree works.
/// Tags come back in the order git reports them; callers sort as needed.
///
/// # Errors
///
/// Returns [`TagsError::Io`] if `path` cannot be read, or [`TagsError::Git`] if no repository
/// can be found or read.
pub fn tags(path: Option<&Path>) -> Result<Vec<String>, TagsError> {
    let start = start_dir(path)?;
    let repo = Repository::discover(&start)?;

    let tags: Vec<String> = repo
        .tag_names(None)?
        .iter()
        .flatten()
        .map(str::to_owned)
        .collect();

    debug!(count = tags.len(), repo = %repo.path().display(), "read repository tags");
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo_with_commit() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        {
            let sig = git2::Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .unwrap();
        }
        (dir, repo)
    }

    #[test]
    fn test_no_tags() {
        let (dir, _repo) = repo_with_commit();
        assert!(tags(Some(dir.path())).unwrap().is_empty());
    }

    #[test]
    fn test_tags() {
        let (dir, repo) = repo_with_commit();
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();

        for name in ["0.0.2", "0.1.0-alpha.01", "v0.0.1", "v0.1.0"] {
            repo.tag_lightweight(name, head.as_object(), false).unwrap();
        }
        repo.tag("0.1.1-beta.0", head.as_object(), &sig, "annotated", false)
            .unwrap();

        let mut found = tags(Some(dir.path())).unwrap();
        found.sort();
        assert_eq!(
            vec!["0.0.2", "0.1.0-alpha.01", "0.1.1-beta.0", "v0.0.1", "v0.1.0"],
            found
        );
    }

    #[test]
    fn test_tags_from_file_and_subdir() {
        let (dir, repo) = repo_with_commit();
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        repo.tag_lightweight("1.0.0", head.as_object(), false).unwrap();

        let sub = dir.path().join("nested").join("deeper");
        std::fs::create_dir_all(&sub).unwrap();
        let file = sub.join("Cargo.toml");
        std::fs::write(&file, "").unwrap();

        assert_eq!(vec!["1.0.0"], tags(Some(&sub)).unwrap());
        assert_eq!(vec!["1.0.0"], tags(Some(&file)).unwrap());
    }

    #[test]
    fn test_missing_path() {
        let dir = TempDir::new().unwrap();
        // discovery walks upwards, so only a missing path is a guaranteed failure
        let missing = dir.path().join("missing");
        match tags(Some(&missing)) {
            Err(TagsError::Io { path, source }) => {
                assert_eq!(missing, path);
                assert_eq!(std::io::ErrorKind::NotFound, source.kind());
            }
            other => panic!("expected an io error, got {other:?}"),
        }
    }
}
