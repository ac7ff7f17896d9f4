use std::io::{ErrorKind, Read};

use crate::error::{Result, TransportError};

/// A blocking, ordered source of bytes.
///
/// The decoder only ever borrows read access; ownership of the underlying
/// link stays with the caller. A read that cannot complete blocks until the
/// transport yields data — timeout policy belongs to the transport, not here.
pub trait ByteSource {
    /// Fill `buf` completely, blocking as needed.
    ///
    /// Returns `Err(TransportError::Disconnected)` if the stream ends before
    /// `buf` is full.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Read a single byte.
    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte)?;
        Ok(byte[0])
    }
}

/// Adapts any `Read` into a [`ByteSource`].
///
/// Used for capture-file replay and in-memory streams in tests.
#[derive(Debug)]
pub struct StreamSource<R> {
    inner: R,
}

impl<R: Read> StreamSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Borrow the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consume the source and return the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        read_exact_blocking(&mut self.inner, buf)
    }
}

/// Shared blocking-read loop: retries `Interrupted`, maps EOF to
/// `Disconnected`, propagates everything else.
pub(crate) fn read_exact_blocking<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Err(TransportError::Disconnected),
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(TransportError::Io(err)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_single_bytes_in_order() {
        let mut source = StreamSource::new(Cursor::new(vec![0x5A, 0x01, 0x02]));
        assert_eq!(source.read_byte().unwrap(), 0x5A);
        assert_eq!(source.read_byte().unwrap(), 0x01);
        assert_eq!(source.read_byte().unwrap(), 0x02);
    }

    #[test]
    fn exhausted_stream_reports_disconnected() {
        let mut source = StreamSource::new(Cursor::new(Vec::<u8>::new()));
        let err = source.read_byte().unwrap_err();
        assert!(matches!(err, TransportError::Disconnected));
    }

    #[test]
    fn partial_final_read_reports_disconnected() {
        let mut source = StreamSource::new(Cursor::new(vec![0xAA, 0xBB]));
        let mut buf = [0u8; 4];
        let err = source.read_exact(&mut buf).unwrap_err();
        assert!(matches!(err, TransportError::Disconnected));
    }

    #[test]
    fn interrupted_read_retries() {
        struct InterruptedThenData {
            state: u8,
            bytes: Vec<u8>,
            pos: usize,
        }

        impl Read for InterruptedThenData {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if self.state == 0 {
                    self.state = 1;
                    return Err(std::io::Error::from(ErrorKind::Interrupted));
                }
                if self.pos >= self.bytes.len() {
                    return Ok(0);
                }
                let n = (self.bytes.len() - self.pos).min(buf.len());
                buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
                self.pos += n;
                Ok(n)
            }
        }

        let mut source = StreamSource::new(InterruptedThenData {
            state: 0,
            bytes: vec![0x5A],
            pos: 0,
        });
        assert_eq!(source.read_byte().unwrap(), 0x5A);
    }

    #[test]
    fn byte_by_byte_reader_fills_multi_byte_reads() {
        struct ByteByByteReader {
            bytes: Vec<u8>,
            pos: usize,
        }

        impl Read for ByteByByteReader {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if self.pos >= self.bytes.len() || buf.is_empty() {
                    return Ok(0);
                }
                buf[0] = self.bytes[self.pos];
                self.pos += 1;
                Ok(1)
            }
        }

        let mut source = StreamSource::new(ByteByByteReader {
            bytes: 1.5f32.to_be_bytes().to_vec(),
            pos: 0,
        });
        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).unwrap();
        assert_eq!(f32::from_be_bytes(buf), 1.5);
    }
}
