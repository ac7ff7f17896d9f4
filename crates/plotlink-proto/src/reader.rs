use plotlink_transport::ByteSource;
use tracing::{debug, trace};

use crate::command::{command_name, SIGNATURE};
use crate::decode::{decode_payload, Command};
use crate::error::Result;

/// The fixed-size header of one frame.
///
/// `length` is read off the wire but its semantics are command-dependent;
/// the commands that carry variable payloads re-declare their own sizes
/// inside the payload, so decoding never trusts this field for sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub length: u8,
    pub command: u8,
}

/// Finds frame boundaries in an unsynchronized byte stream.
///
/// Bytes that do not match the signature are discarded one at a time — that
/// is the resynchronization mechanism. Once a byte is consumed it cannot be
/// un-consumed; a signature byte occurring inside payload data is
/// indistinguishable from a genuine frame start. That is a property of the
/// wire format, not of this reader.
pub struct FrameReader<S> {
    source: S,
}

impl<S: ByteSource> FrameReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Scan to the next signature byte and read the frame header (blocking).
    ///
    /// On return the source is positioned at the first payload byte.
    /// Returns `Err(Transport(Disconnected))` when the stream ends.
    pub fn next_frame(&mut self) -> Result<FrameHeader> {
        let mut discarded = 0usize;
        loop {
            let byte = self.source.read_byte()?;
            if byte == SIGNATURE {
                break;
            }
            trace!(byte = format_args!("0x{byte:02X}"), "discarding stray byte");
            discarded += 1;
        }
        if discarded > 0 {
            debug!(discarded, "resynchronized to frame signature");
        }

        let length = self.source.read_byte()?;
        let command = self.source.read_byte()?;
        trace!(
            length,
            command = command_name(command),
            "frame header"
        );

        Ok(FrameHeader { length, command })
    }

    /// Read the next frame and decode its payload into a [`Command`].
    pub fn next_command(&mut self) -> Result<Command> {
        let header = self.next_frame()?;
        decode_payload(&mut self.source, header)
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the underlying source.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the reader and return the inner source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use plotlink_transport::{StreamSource, TransportError};

    use super::*;
    use crate::command;
    use crate::error::ProtoError;

    fn reader_over(bytes: Vec<u8>) -> FrameReader<StreamSource<Cursor<Vec<u8>>>> {
        FrameReader::new(StreamSource::new(Cursor::new(bytes)))
    }

    #[test]
    fn stream_without_signature_is_fully_consumed() {
        let bytes: Vec<u8> = (0x00..0x5A).collect();
        let total = bytes.len() as u64;
        let mut reader = reader_over(bytes);

        let err = reader.next_frame().unwrap_err();
        assert!(matches!(
            err,
            ProtoError::Transport(TransportError::Disconnected)
        ));

        let cursor = reader.into_inner().into_inner();
        assert_eq!(cursor.position(), total);
    }

    #[test]
    fn sentinel_signature_at_end_is_found() {
        let mut bytes: Vec<u8> = vec![0x00, 0x11, 0x22, 0x33];
        bytes.extend_from_slice(&[SIGNATURE, 0x00, command::CLEAR]);
        let mut reader = reader_over(bytes);

        let header = reader.next_frame().unwrap();
        assert_eq!(header.length, 0);
        assert_eq!(header.command, command::CLEAR);
    }

    #[test]
    fn one_garbage_byte_costs_exactly_one_discard() {
        // Garbage, then a well-formed CLEAR frame with its check byte.
        let bytes = vec![0x00, SIGNATURE, 0x00, command::CLEAR, 0xEE];
        let mut reader = reader_over(bytes);

        let header = reader.next_frame().unwrap();
        assert_eq!(header.command, command::CLEAR);

        // One discarded byte + three header bytes consumed; the check byte
        // is still in the stream (swallowed by the next signature scan).
        let cursor = reader.into_inner().into_inner();
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn aligned_stream_discards_nothing() {
        let bytes = vec![SIGNATURE, 0x04, command::PLOT];
        let mut reader = reader_over(bytes);

        let header = reader.next_frame().unwrap();
        assert_eq!(header, FrameHeader {
            length: 4,
            command: command::PLOT
        });
        assert_eq!(reader.into_inner().into_inner().position(), 3);
    }

    #[test]
    fn truncated_header_reports_disconnected() {
        let mut reader = reader_over(vec![SIGNATURE, 0x02]);
        let err = reader.next_frame().unwrap_err();
        assert!(matches!(
            err,
            ProtoError::Transport(TransportError::Disconnected)
        ));
    }

    #[test]
    fn back_to_back_frames_decode_in_order() {
        let mut bytes = vec![SIGNATURE, 0x00, command::CLEAR];
        // CLEAR consumes nothing after the header, so its check byte is the
        // next scan's stray byte.
        bytes.push(0x07);
        bytes.extend_from_slice(&[SIGNATURE, 0x00, command::SET_TIME]);
        let mut reader = reader_over(bytes);

        assert_eq!(reader.next_frame().unwrap().command, command::CLEAR);
        assert_eq!(reader.next_frame().unwrap().command, command::SET_TIME);
    }
}
