use plotlink_transport::ByteSource;
use tracing::trace;

use crate::command;
use crate::error::{ProtoError, Result};
use crate::reader::FrameHeader;

/// One decoded frame payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Consume the frame; the renderer's next draw handles any clearing.
    Clear,
    /// Wholesale replacement for one trace slot.
    Plot { trace: u8, samples: Vec<(f64, f64)> },
    /// On the wire but unimplemented on both ends.
    SetVisible,
    /// On the wire but unimplemented on both ends.
    SetStepTime,
    /// On the wire but unimplemented on both ends.
    SetTime,
    /// A message for the external logger; carries no series data.
    TextMsg { id: u8, message: Vec<u8> },
    /// Values to append onto trace slot 1's step plot.
    ByteBuffer { values: Vec<f32> },
}

impl Command {
    /// The wire code this payload was decoded from.
    pub fn code(&self) -> u8 {
        match self {
            Command::Clear => command::CLEAR,
            Command::Plot { .. } => command::PLOT,
            Command::SetVisible => command::SET_VISIBLE,
            Command::SetStepTime => command::SET_STEP_TIME,
            Command::SetTime => command::SET_TIME,
            Command::TextMsg { .. } => command::TEXT_MSG,
            Command::ByteBuffer { .. } => command::BYTE_BUFFER,
        }
    }
}

/// Decode the payload following `header`, leaving the source positioned for
/// the next signature scan.
///
/// Payload sizes come from the per-command size fields, never from
/// `header.length`. CLEAR and the SET_* commands consume nothing at all —
/// not even the check byte — matching the instrument-side firmware; the
/// stray check byte is swallowed by the next resynchronization scan.
pub fn decode_payload<S: ByteSource>(source: &mut S, header: FrameHeader) -> Result<Command> {
    match header.command {
        command::CLEAR => Ok(Command::Clear),
        command::SET_VISIBLE => Ok(Command::SetVisible),
        command::SET_STEP_TIME => Ok(Command::SetStepTime),
        command::SET_TIME => Ok(Command::SetTime),
        command::PLOT => decode_plot(source),
        command::TEXT_MSG => decode_text_msg(source),
        command::BYTE_BUFFER => decode_byte_buffer(source),
        other => Err(ProtoError::UnknownCommand(other)),
    }
}

/// PLOT payload: trace index, double count, then x/y pairs.
///
/// The doubles are native-endian — the instrument emits host byte order for
/// this command only.
fn decode_plot<S: ByteSource>(source: &mut S) -> Result<Command> {
    let trace = source.read_byte()?;
    let len = source.read_byte()?;
    if len % 2 != 0 {
        return Err(ProtoError::OddSampleCount(len));
    }

    let mut samples = Vec::with_capacity(len as usize / 2);
    let mut field = [0u8; 8];
    for _ in 0..len / 2 {
        source.read_exact(&mut field)?;
        let x = f64::from_ne_bytes(field);
        source.read_exact(&mut field)?;
        let y = f64::from_ne_bytes(field);
        samples.push((x, y));
    }

    let _check = source.read_byte()?;
    trace!(trace, samples = samples.len(), "decoded PLOT");
    Ok(Command::Plot { trace, samples })
}

/// TEXT_MSG payload: id, size, raw message bytes.
fn decode_text_msg<S: ByteSource>(source: &mut S) -> Result<Command> {
    let id = source.read_byte()?;
    let size = source.read_byte()?;

    let mut message = vec![0u8; size as usize];
    source.read_exact(&mut message)?;

    let _check = source.read_byte()?;
    trace!(id, size, "decoded TEXT_MSG");
    Ok(Command::TextMsg { id, message })
}

/// BYTE_BUFFER payload: size, then size/4 big-endian f32 values.
fn decode_byte_buffer<S: ByteSource>(source: &mut S) -> Result<Command> {
    let size = source.read_byte()?;
    if size % 4 != 0 {
        return Err(ProtoError::UnalignedBuffer(size));
    }

    let mut values = Vec::with_capacity(size as usize / 4);
    let mut field = [0u8; 4];
    for _ in 0..size / 4 {
        source.read_exact(&mut field)?;
        values.push(f32::from_be_bytes(field));
    }

    let _check = source.read_byte()?;
    trace!(values = values.len(), "decoded BYTE_BUFFER");
    Ok(Command::ByteBuffer { values })
}
