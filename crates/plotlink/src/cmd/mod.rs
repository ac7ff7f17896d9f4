use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod ports;
pub mod replay;
pub mod watch;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Attach to a serial port and decode the live frame stream.
    Watch(WatchArgs),
    /// Decode a recorded byte capture from disk.
    Replay(ReplayArgs),
    /// List serial ports visible on this host.
    Ports(PortsArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Watch(args) => watch::run(args, format),
        Command::Replay(args) => replay::run(args, format),
        Command::Ports(args) => ports::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Serial port to open (e.g. /dev/ttyUSB1).
    pub port: String,
    /// Baud rate.
    #[arg(long, default_value = "115200")]
    pub baud: u32,
    /// Number of trace slots (visualization panels).
    #[arg(long, default_value = "2")]
    pub slots: usize,
    /// Exit after decoding N frames.
    #[arg(long)]
    pub frames: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Capture file containing raw frame bytes.
    pub file: PathBuf,
    /// Number of trace slots (visualization panels).
    #[arg(long, default_value = "2")]
    pub slots: usize,
    /// Exit after decoding N frames.
    #[arg(long)]
    pub frames: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub struct PortsArgs {}
