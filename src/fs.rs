use std::fs;
use std::io;
use std::path::Path;

/// The two file operations a conversion needs.
///
/// The command-line front end is generic over this trait so that argument
/// handling can be checked without touching the disk.
pub trait FileSystem {
    fn read_all_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Creates or truncates `path` and writes `text` to it.
    fn write_all_text(&self, path: &Path, text: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_all_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_all_text(&self, path: &Path, text: &str) -> io::Result<()> {
        fs::write(path, text)
    }
}
