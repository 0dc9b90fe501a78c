use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::BufferBuilder;

/// A binary file format whose contents are held in a [`BufferBuilder`].
///
/// Implementations decide how a file is parsed, by implementing [`BinaryFile::read_data`].
/// Writing is the same for every format: the whole buffer is written out as-is.
pub trait BinaryFile {
    /// The record data.
    fn data(&self) -> &BufferBuilder;

    /// Mutable access to the record data.
    fn data_mut(&mut self) -> &mut BufferBuilder;

    /// Loads the file contents. `open` returns a fresh handle to the file each time it is
    /// called, so formats that need several passes can reopen it.
    fn read_data(&mut self, open: &dyn Fn() -> io::Result<File>) -> io::Result<()>;

    /// Reads the file at `path`.
    fn read(&mut self, path: &Path) -> io::Result<()> {
        tracing::debug!(path = %path.display(), "reading binary file");
        self.read_data(&|| File::open(path))
    }

    /// Writes the whole buffer to `path`, replacing any previous contents.
    fn write(&self, path: &Path) -> io::Result<()> {
        let bytes = self.data().snapshot();
        tracing::debug!(path = %path.display(), len = bytes.len(), "writing binary file");

        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        f.flush()
    }
}
