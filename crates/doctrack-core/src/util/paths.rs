//! Generic path utilities.

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a tilde are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Render `path` relative to `root`, joined with `/` on every platform.
///
/// Falls back to the full path when `path` does not live under `root`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use doctrack_core::util::paths::relative_display;
///
/// assert_eq!(relative_display(Path::new("/docs/b/c.md"), Path::new("/docs")), "b/c.md");
/// assert_eq!(relative_display(Path::new("a.md"), Path::new(".")), "a.md");
/// ```
pub fn relative_display(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative
        .components()
        .filter_map(|c| match c {
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_display_nested() {
        let root = Path::new("/data/docs");
        let path = root.join("guide").join("intro.md");
        assert_eq!(relative_display(&path, root), "guide/intro.md");
    }

    #[test]
    fn test_relative_display_top_level() {
        assert_eq!(
            relative_display(Path::new("/data/docs/a.md"), Path::new("/data/docs")),
            "a.md"
        );
    }

    #[test]
    fn test_relative_display_dot_root() {
        let root = Path::new(".");
        let path = root.join("b").join("c.markdown");
        assert_eq!(relative_display(&path, root), "b/c.markdown");
    }

    #[test]
    fn test_relative_display_outside_root() {
        assert_eq!(
            relative_display(Path::new("other/x.md"), Path::new("docs")),
            "other/x.md"
        );
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde("/etc/doctrack.toml"), PathBuf::from("/etc/doctrack.toml"));
        assert_eq!(expand_tilde("relative.toml"), PathBuf::from("relative.toml"));
    }
}
