//! Signature-delimited frame decoding for the instrument plot protocol.
//!
//! This is the core value-add layer of plotlink. Every frame on the wire is:
//!
//! ```text
//! ┌───────────┬────────────┬─────────────┬─────────────────────┬───────────┐
//! │ Signature │ Length     │ Command     │ Payload              │ Check     │
//! │ 0x5A (1B) │ (1B)       │ (1B)        │ (command-dependent)  │ (1B)      │
//! └───────────┴────────────┴─────────────┴─────────────────────┴───────────┘
//! ```
//!
//! There is no look-ahead and no rollback: alignment is recovered by
//! discarding bytes one at a time until the next signature. The trailing
//! check byte is carried on the wire but never validated — it is read and
//! discarded where the instrument firmware emits it.
//!
//! Numeric payloads are deliberately mixed-endian: PLOT carries
//! native-endian `f64` pairs while BYTE_BUFFER carries big-endian `f32`
//! values. That asymmetry is the wire contract the instrument actually
//! speaks, so it is encoded per command here rather than unified.

pub mod command;
pub mod decode;
pub mod error;
pub mod reader;

pub use command::{command_name, SIGNATURE};
pub use decode::{decode_payload, Command};
pub use error::{ProtoError, Result};
pub use reader::{FrameHeader, FrameReader};
