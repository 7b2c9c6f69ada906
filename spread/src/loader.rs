//! Cached template loading.
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use crate::{Config, Data, Error, Fragment, Result};

/// Reads and parses templates once.
///
/// A [`Loader`] keeps two caches: template file content by path, and parsed [`Fragment`] by
/// source. Returned fragments are bound copies of the cached prototype.
///
/// When [`Config::reload`] is active, files are read again on every call, a changed file is
/// parsed again while an unchanged one is still served from cache.
#[derive(Debug, Default)]
pub struct Loader {
    config: Config,
    sources: Mutex<HashMap<PathBuf, Arc<str>>>,
    fragments: Mutex<HashMap<Arc<str>, Fragment>>,
}

impl Loader {
    pub fn new(config: Config) -> Loader {
        Loader {
            config,
            sources: Mutex::default(),
            fragments: Mutex::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the template at `path` and bind `data`.
    ///
    /// # Errors
    ///
    /// [`Error::Read`] if the file cannot be read.
    pub fn fragment(&self, path: impl AsRef<Path>, data: impl Into<Data>) -> Result<Fragment> {
        let source = self.read(path.as_ref())?;
        Ok(self.prototype(source).bind(data))
    }

    /// Parse `source` and bind `data`.
    pub fn parse(&self, source: &str, data: impl Into<Data>) -> Fragment {
        self.prototype(source.into()).bind(data)
    }

    /// Empty both caches.
    pub fn clear(&self) {
        self.sources.lock().unwrap_or_else(PoisonError::into_inner).clear();
        self.fragments.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    fn read(&self, path: &Path) -> Result<Arc<str>> {
        let path = self.config.resolve(path);
        let reload = self.config.reload().as_bool();

        if !reload {
            let sources = self.sources.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(source) = sources.get(&path) {
                return Ok(source.clone());
            }
        }

        log::debug!("reading template `{}`", path.display());

        let source: Arc<str> = match std::fs::read_to_string(&path) {
            Ok(ok) => ok.into(),
            Err(source) => return Err(Error::Read { path, source }),
        };

        self.sources
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, source.clone());

        Ok(source)
    }

    fn prototype(&self, source: Arc<str>) -> Fragment {
        let mut fragments = self.fragments.lock().unwrap_or_else(PoisonError::into_inner);
        fragments
            .entry(source)
            .or_insert_with_key(|source|{
                log::debug!("parsing uncached template");
                Fragment::parse(source)
            })
            .clone()
    }
}

#[cfg(test)]
mod test {
    use super::Loader;

    #[test]
    fn parse_cached() {
        let loader = Loader::default();
        let a = loader.parse("<p>{name}</p>", [("name", "a")]);
        let b = loader.parse("<p>{name}</p>", [("name", "b")]);
        assert_eq!(loader.fragments.lock().unwrap().len(),1);
        assert_eq!(a.serialize(None).unwrap(),"<p>a</p>");
        assert_eq!(b.serialize(None).unwrap(),"<p>b</p>");

        loader.clear();
        assert!(loader.fragments.lock().unwrap().is_empty());
    }

    #[test]
    fn send_sync() {
        fn assert<T: Send + Sync>() {}
        assert::<Loader>();
    }
}
