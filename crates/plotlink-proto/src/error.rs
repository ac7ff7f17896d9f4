/// Errors that can occur while decoding the frame stream.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// The command code is outside the instrument's vocabulary.
    #[error("unknown command code 0x{0:02X}")]
    UnknownCommand(u8),

    /// A PLOT frame declared an odd number of doubles; samples come in
    /// x/y pairs so the count must be even.
    #[error("plot sample count {0} is odd (expected x/y pairs)")]
    OddSampleCount(u8),

    /// A BYTE_BUFFER frame declared a size that is not a whole number of
    /// 4-byte values.
    #[error("byte buffer size {0} is not a multiple of 4")]
    UnalignedBuffer(u8),

    /// Transport-level error (disconnect, I/O failure).
    #[error("transport error: {0}")]
    Transport(#[from] plotlink_transport::TransportError),
}

impl ProtoError {
    /// Decode-level errors are recoverable: the caller logs them and
    /// resumes signature search from the current stream position.
    /// Transport errors are not — the link itself failed.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ProtoError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, ProtoError>;
