//! Request path resolution
//!
//! `/playlists/...` serves compiled output as JSON and 404s when missing.
//! Every other path serves a static asset, falling back to `index.html` so
//! the front-end router can handle it.

use super::mime::{content_type_for, APPLICATION_JSON, TEXT_HTML};
use std::path::{Path, PathBuf};

/// First path segment of compiled playlist requests
pub const PLAYLISTS_SEGMENT: &str = "playlists";

/// Front-end entry point served for unmatched paths
pub const INDEX_HTML: &str = "index.html";

/// What a GET request resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    File {
        path: PathBuf,
        content_type: &'static str,
    },
    NotFound,
}

/// Map a URL path onto `root`; `None` if a `..` segment would leave it
fn map_to_root(root: &Path, url_path: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for segment in url_path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            segment => path.push(segment),
        }
    }
    Some(path)
}

fn is_playlists_request(url_path: &str) -> bool {
    url_path
        .split('/')
        .find(|segment| !segment.is_empty())
        .is_some_and(|segment| segment == PLAYLISTS_SEGMENT)
}

fn index_fallback(root: &Path) -> Resolution {
    let index = root.join(INDEX_HTML);
    if index.is_file() {
        Resolution::File {
            path: index,
            content_type: TEXT_HTML,
        }
    } else {
        Resolution::NotFound
    }
}

/// Resolve a request path against the served root
pub fn resolve(root: &Path, url_path: &str) -> Resolution {
    let decoded = urlencoding::decode(url_path)
        .map(|path| path.into_owned())
        .unwrap_or_else(|_| url_path.to_string());
    let local = map_to_root(root, &decoded);

    if is_playlists_request(&decoded) {
        return match local {
            Some(path) if path.is_file() => Resolution::File {
                path,
                content_type: APPLICATION_JSON,
            },
            _ => Resolution::NotFound,
        };
    }

    match local {
        Some(path) if path != root && path.is_file() => Resolution::File {
            content_type: content_type_for(&path),
            path,
        },
        _ => index_fallback(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn served_root() -> TempDir {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("index.html"), "<html></html>").unwrap();
        fs::write(root.path().join("main.js"), "console.log(1)").unwrap();
        fs::create_dir(root.path().join("assets")).unwrap();
        fs::write(root.path().join("assets").join("logo.svg"), "<svg/>").unwrap();
        fs::create_dir(root.path().join("playlists")).unwrap();
        fs::write(root.path().join("playlists").join("index"), "{}").unwrap();
        fs::write(root.path().join("playlists").join("road-trip"), "[]").unwrap();
        root
    }

    fn file(path: PathBuf, content_type: &'static str) -> Resolution {
        Resolution::File { path, content_type }
    }

    #[test]
    fn test_playlist_files_are_json() {
        let root = served_root();
        assert_eq!(
            resolve(root.path(), "/playlists/index"),
            file(root.path().join("playlists/index"), "application/json")
        );
        assert_eq!(
            resolve(root.path(), "/playlists/road-trip"),
            file(root.path().join("playlists/road-trip"), "application/json")
        );
    }

    #[test]
    fn test_missing_playlist_is_not_found() {
        let root = served_root();
        assert_eq!(resolve(root.path(), "/playlists/jazz"), Resolution::NotFound);
        assert_eq!(resolve(root.path(), "/playlists"), Resolution::NotFound);
    }

    #[test]
    fn test_static_assets_by_extension() {
        let root = served_root();
        assert_eq!(
            resolve(root.path(), "/main.js"),
            file(root.path().join("main.js"), "text/javascript")
        );
        assert_eq!(
            resolve(root.path(), "/assets/logo.svg"),
            file(root.path().join("assets/logo.svg"), "image/svg+xml")
        );
    }

    #[test]
    fn test_spa_fallback() {
        let root = served_root();
        let index = file(root.path().join("index.html"), "text/html");

        assert_eq!(resolve(root.path(), "/"), index);
        assert_eq!(resolve(root.path(), "/player/road-trip"), index);
        assert_eq!(resolve(root.path(), "/assets"), index);
    }

    #[test]
    fn test_percent_decoding() {
        let root = served_root();
        fs::write(root.path().join("my file.css"), "body{}").unwrap();

        assert_eq!(
            resolve(root.path(), "/my%20file.css"),
            file(root.path().join("my file.css"), "text/css")
        );
    }

    #[test]
    fn test_parent_segments_stay_inside_root() {
        let root = served_root();
        assert_eq!(
            resolve(root.path(), "/playlists/../../etc/passwd"),
            Resolution::NotFound
        );
        assert_eq!(
            resolve(root.path(), "/../secret.txt"),
            file(root.path().join("index.html"), "text/html")
        );
    }

    #[test]
    fn test_missing_index_html() {
        let root = TempDir::new().unwrap();
        assert_eq!(resolve(root.path(), "/anything"), Resolution::NotFound);
    }
}
