//! In-memory staging of the output ZIP archive.

use std::io::{Cursor, Write};

use log::trace;
use zip::CompressionMethod;
use zip::result::ZipError;
use zip::write::{FileOptions, ZipWriter};


/// Writer staging finished memes into an in-memory ZIP archive.
///
/// Entries are written in the order they are added, which the pipeline
/// guarantees to be the input index order.
pub struct ArchiveWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    entries: usize,
}

impl ArchiveWriter {
    pub fn new() -> Self {
        ArchiveWriter{
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            entries: 0,
        }
    }

    /// Stage one entry into the archive.
    pub fn add(&mut self, name: &str, bytes: &[u8]) -> Result<(), ZipError> {
        trace!("Staging archive entry `{}` ({} bytes)", name, bytes.len());
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated);
        self.zip.start_file(name, options)?;
        self.zip.write_all(bytes).map_err(ZipError::Io)?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries staged so far.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    /// Finish the archive and return its bytes.
    pub fn finish(mut self) -> Result<Vec<u8>, ZipError> {
        Ok(self.zip.finish()?.into_inner())
    }
}

impl Default for ArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::ArchiveWriter;

    #[test]
    fn roundtrip() {
        let mut writer = ArchiveWriter::new();
        writer.add("meme_1.jpg", b"first").unwrap();
        writer.add("meme_2.jpg", b"second").unwrap();
        assert_eq!(2, writer.entry_count());

        let bytes = writer.finish().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(2, archive.len());
        let mut content = Vec::new();
        archive.by_name("meme_2.jpg").unwrap().read_to_end(&mut content).unwrap();
        assert_eq!(b"second".to_vec(), content);
    }

    #[test]
    fn empty_archive_is_valid() {
        let bytes = ArchiveWriter::new().finish().unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(0, archive.len());
    }
}
