//! Buffered reader with seamless .gz decompression.
#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read, Result};
use std::path::Path;

#[derive(Debug)]
pub enum BufferedReader {
    /// Readable (plain) file
    Plain(BufReader<File>),
    /// Gzip compressed file
    #[cfg(feature = "flate2")]
    Gz(BufReader<GzDecoder<File>>),
}

impl BufferedReader {
    /// Opens given file for buffered line iteration,
    /// decompressing on the fly when it carries a .gz extension.
    pub fn new(path: &Path) -> Result<Self> {
        let fd = File::open(path)?;
        let gzip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);
        if gzip {
            #[cfg(feature = "flate2")]
            {
                Ok(Self::Gz(BufReader::new(GzDecoder::new(fd))))
            }
            #[cfg(not(feature = "flate2"))]
            {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Unsupported,
                    ".gz data requires the flate2 feature",
                ))
            }
        } else {
            Ok(Self::Plain(BufReader::new(fd)))
        }
    }
}

impl Read for BufferedReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self {
            Self::Plain(ref mut reader) => reader.read(buf),
            #[cfg(feature = "flate2")]
            Self::Gz(ref mut reader) => reader.read(buf),
        }
    }
}

impl std::io::BufRead for BufferedReader {
    fn fill_buf(&mut self) -> Result<&[u8]> {
        match self {
            Self::Plain(ref mut reader) => reader.fill_buf(),
            #[cfg(feature = "flate2")]
            Self::Gz(ref mut reader) => reader.fill_buf(),
        }
    }
    fn consume(&mut self, amount: usize) {
        match self {
            Self::Plain(ref mut reader) => reader.consume(amount),
            #[cfg(feature = "flate2")]
            Self::Gz(ref mut reader) => reader.consume(amount),
        }
    }
}
