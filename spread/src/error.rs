use std::{io, path::PathBuf, sync::Arc};

/// [`Result`][std::result::Result] alias for [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error that can occur during rendering, lookup, or loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required marker could not be resolved at render time.
    #[error("missing `{name}` in {template}")]
    Missing {
        name: Box<str>,
        template: Arc<str>,
    },
    /// Lookup of a key that no marker declares.
    #[error("unknown key `{0}`")]
    UnknownKey(Box<str>),
    /// The bound value cannot be substituted at the marker position.
    #[error("cannot substitute {kind} into {position} for `{name}`")]
    Unsupported {
        name: Box<str>,
        kind: &'static str,
        position: Position,
    },
    /// A template file could not be read.
    #[error("failed to read template `{}`", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Where a marker token occurs in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Attribute,
    Text,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Attribute => f.write_str("attribute"),
            Position::Text => f.write_str("text"),
        }
    }
}

impl Error {
    /// Convert error to [`io::Error`].
    ///
    /// Errors other than [`Error::Read`] and [`Error::Io`] will become
    /// [`io::ErrorKind::InvalidData`].
    pub fn into_io(self) -> io::Error {
        match self {
            Error::Read { source, .. } => source,
            Error::Io(error) => error,
            err => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}
