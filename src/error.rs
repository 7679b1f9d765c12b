use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures at the two file boundaries of a conversion. The transform
/// itself cannot fail.
#[derive(Debug)]
pub enum ConvertError {
    /// The input file is missing or unreadable.
    Read {
        path: PathBuf,
        source: io::Error,
    },
    /// The output file could not be created or written.
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

pub type ConvertResult<T> = Result<T, ConvertError>;

impl ConvertError {
    pub fn path(&self) -> &PathBuf {
        match *self {
            ConvertError::Read { ref path, .. } => path,
            ConvertError::Write { ref path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match *self {
            ConvertError::Read { ref source, .. } => source,
            ConvertError::Write { ref source, .. } => source,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConvertError::Read { ref path, ref source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ConvertError::Write { ref path, ref source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(self.io_error())
    }
}
