use std::time::Duration;

use serialport::{DataBits, Parity, SerialPort, SerialPortInfo, StopBits};
use tracing::{debug, info};

use crate::error::{Result, TransportError};
use crate::source::{read_exact_blocking, ByteSource};

/// Line settings for the instrument link.
///
/// The instrument transmits 8N1; only the baud rate varies between setups.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Baud rate. Default: 115200.
    pub baud_rate: u32,
    /// Read timeout for the underlying port. A timed-out read surfaces as an
    /// I/O error; the decoder itself has no timeout policy.
    pub read_timeout: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            read_timeout: Duration::from_secs(60),
        }
    }
}

/// A serial-port byte source.
///
/// Exclusively owned by the frame reader for the process lifetime — nothing
/// else reads from the port once decoding starts.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
    name: String,
}

impl SerialLink {
    /// Open a serial port with default line settings.
    pub fn open(name: &str) -> Result<Self> {
        Self::open_with_config(name, &LinkConfig::default())
    }

    /// Open a serial port with explicit line settings.
    pub fn open_with_config(name: &str, config: &LinkConfig) -> Result<Self> {
        let port = serialport::new(name, config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(config.read_timeout)
            .open()
            .map_err(|source| TransportError::Open {
                port: name.to_string(),
                source,
            })?;

        info!(port = name, baud = config.baud_rate, "opened serial link");

        Ok(Self {
            port,
            name: name.to_string(),
        })
    }

    /// The port name this link was opened on.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ByteSource for SerialLink {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        read_exact_blocking(&mut self.port, buf)
    }
}

impl std::fmt::Debug for SerialLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialLink").field("port", &self.name).finish()
    }
}

/// Enumerate serial ports visible on this host.
pub fn available_ports() -> Result<Vec<SerialPortInfo>> {
    let ports = serialport::available_ports().map_err(TransportError::Enumerate)?;
    debug!(count = ports.len(), "enumerated serial ports");
    Ok(ports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_instrument_line_settings() {
        let config = LinkConfig::default();
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.read_timeout, Duration::from_secs(60));
    }
}
