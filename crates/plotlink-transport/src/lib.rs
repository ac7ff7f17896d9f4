//! Blocking byte-source abstraction for the plotlink decoder.
//!
//! The protocol layer consumes one byte at a time from an unbounded stream.
//! This crate provides that primitive:
//! - [`ByteSource`] — the blocking read trait the decoder is written against
//! - [`SerialLink`] — a serial-port byte source (the instrument link)
//! - [`StreamSource`] — an adapter for anything implementing `Read`
//!   (capture files, in-memory buffers)
//!
//! This is the lowest layer of plotlink. Everything else builds on top of
//! the [`ByteSource`] trait provided here.

pub mod error;
pub mod serial;
pub mod source;

pub use error::{Result, TransportError};
pub use serial::{available_ports, LinkConfig, SerialLink};
pub use serialport::{SerialPortInfo, SerialPortType};
pub use source::{ByteSource, StreamSource};
