//! Repository URL resolution.
//!
//! `site.repo` accepts the forms people usually paste:
//!
//! | Input                               | Resolved URL                       |
//! |-------------------------------------|------------------------------------|
//! | `owner/name`                        | `https://github.com/owner/name`    |
//! | `github:owner/name`                 | `https://github.com/owner/name`    |
//! | `git@gitlab.com:owner/name.git`     | `https://gitlab.com/owner/name`    |
//! | `https://git.example.com/owner/name`| unchanged                          |
//!
//! Anything else resolves to [`DEFAULT_REPO_URL`].

use url::Url;

/// Fallback when `site.repo` is missing or unparseable.
pub const DEFAULT_REPO_URL: &str = "https://github.com";

const GITHUB: &str = "https://github.com";

/// Resolve a repository reference to a browsable URL.
///
/// Never fails: unrecognized input is logged and mapped to
/// [`DEFAULT_REPO_URL`].
#[must_use]
pub fn repo_url(repo: Option<&str>) -> String {
    let Some(repo) = repo.map(str::trim).filter(|r| !r.is_empty()) else {
        return DEFAULT_REPO_URL.to_owned();
    };

    parse_repo(repo).unwrap_or_else(|| {
        tracing::debug!("unrecognized repository reference {repo:?}, using default");
        DEFAULT_REPO_URL.to_owned()
    })
}

fn parse_repo(repo: &str) -> Option<String> {
    if repo.starts_with("http://") || repo.starts_with("https://") {
        let url = Url::parse(repo).ok()?;
        url.host_str()?;
        return Some(repo.trim_end_matches('/').to_owned());
    }

    if let Some(rest) = repo.strip_prefix("git@") {
        let (host, path) = rest.split_once(':')?;
        let slug = owner_and_name(path)?;
        if host.is_empty() {
            return None;
        }
        return Some(format!("https://{host}/{slug}"));
    }

    let shorthand = repo.strip_prefix("github:").unwrap_or(repo);
    let slug = owner_and_name(shorthand)?;
    Some(format!("{GITHUB}/{slug}"))
}

/// Validate an `owner/name` pair, dropping a `.git` suffix and `#ref`.
fn owner_and_name(path: &str) -> Option<String> {
    let path = path.split('#').next().unwrap_or(path);
    let path = path.strip_suffix(".git").unwrap_or(path);
    let (owner, name) = path.split_once('/')?;

    let valid = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    (valid(owner) && valid(name)).then(|| format!("{owner}/{name}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_shorthand() {
        assert_eq!(
            repo_url(Some("acme/handbook")),
            "https://github.com/acme/handbook"
        );
    }

    #[test]
    fn test_github_prefix_and_ref() {
        assert_eq!(
            repo_url(Some("github:acme/handbook#main")),
            "https://github.com/acme/handbook"
        );
    }

    #[test]
    fn test_ssh_remote() {
        assert_eq!(
            repo_url(Some("git@gitlab.com:acme/handbook.git")),
            "https://gitlab.com/acme/handbook"
        );
    }

    #[test]
    fn test_http_url_kept() {
        assert_eq!(
            repo_url(Some("https://git.example.com/acme/handbook/")),
            "https://git.example.com/acme/handbook"
        );
    }

    #[test]
    fn test_missing_or_garbage_falls_back() {
        assert_eq!(repo_url(None), DEFAULT_REPO_URL);
        assert_eq!(repo_url(Some("  ")), DEFAULT_REPO_URL);
        assert_eq!(repo_url(Some("not a repo")), DEFAULT_REPO_URL);
        assert_eq!(repo_url(Some("a/b/c")), DEFAULT_REPO_URL);
        assert_eq!(repo_url(Some("https://")), DEFAULT_REPO_URL);
    }
}
