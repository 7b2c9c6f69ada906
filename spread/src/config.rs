//! [`Loader`][crate::Loader] configuration.
use std::path::{Component, Path, PathBuf};

/// Loader configuration.
///
/// ```
/// use spread::{Config, Reload};
///
/// let config = Config::default()
///     .with_templ_dir("views")
///     .with_reload(Reload::Always);
///
/// assert_eq!(config.templ_dir(),"views");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    templ_dir: Box<str>,
    reload: Reload,
}

impl Config {
    pub fn with_templ_dir(mut self, templ_dir: impl Into<Box<str>>) -> Self {
        self.templ_dir = templ_dir.into();
        self
    }

    pub fn with_reload(mut self, reload: Reload) -> Self {
        self.reload = reload;
        self
    }

    /// Directory relative template paths are resolved against.
    pub fn templ_dir(&self) -> &str {
        &self.templ_dir
    }

    pub fn reload(&self) -> Reload {
        self.reload
    }

    /// Resolve a template path.
    ///
    /// Relative paths are joined to the template directory, then `.` and `..` components are
    /// removed lexically.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        normalize_path(&Path::new(&*self.templ_dir).join(path))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templ_dir: String::from("templates").into_boxed_str(),
            reload: Reload::default(),
        }
    }
}

// ===== Reload =====

/// Template file reload behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reload {
    /// Reload only when `debug_assertions` is enabled.
    Debug,
    Always,
    Never,
}

impl Default for Reload {
    /// [`Reload::Debug`] with the `dev-reload` feature, otherwise [`Reload::Never`].
    fn default() -> Self {
        if cfg!(feature = "dev-reload") {
            Reload::Debug
        } else {
            Reload::Never
        }
    }
}

impl Reload {
    pub fn as_bool(&self) -> bool {
        match self {
            Reload::Debug => cfg!(debug_assertions),
            Reload::Always => true,
            Reload::Never => false,
        }
    }
}

// ===== utils =====

fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = match components.peek().cloned() {
        Some(c @ Component::Prefix(..)) => {
            components.next();
            PathBuf::from(c.as_os_str())
        }
        _ => PathBuf::new(),
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::CurDir => {}
            Component::RootDir => ret.push(component.as_os_str()),
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }

    ret
}

#[cfg(test)]
mod test {
    use std::path::Path;
    use super::{Config, Reload};

    #[test]
    fn resolve() {
        let config = Config::default();
        assert_eq!(config.resolve("page.html"),Path::new("templates/page.html"));
        assert_eq!(config.resolve("./a/../b/c.html"),Path::new("templates/b/c.html"));
        assert_eq!(config.resolve("../other.html"),Path::new("other.html"));
    }

    #[cfg(unix)]
    #[test]
    fn absolute() {
        let config = Config::default().with_templ_dir("views");
        assert_eq!(config.resolve("/srv/x/../page.html"),Path::new("/srv/page.html"));
    }

    #[test]
    fn reload() {
        assert!(Reload::Always.as_bool());
        assert!(!Reload::Never.as_bool());
        assert_eq!(Reload::Debug.as_bool(),cfg!(debug_assertions));
        assert_eq!(Config::default().with_reload(Reload::Never).reload(),Reload::Never);
    }
}
