mod cmd;
mod exit;
mod logging;
mod output;
mod pump;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "plotlink", version, about = "Serial plot protocol decoder")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_watch_subcommand() {
        let cli = Cli::try_parse_from([
            "plotlink",
            "watch",
            "/dev/ttyUSB1",
            "--baud",
            "57600",
            "--frames",
            "10",
        ])
        .expect("watch args should parse");

        match cli.command {
            Command::Watch(args) => {
                assert_eq!(args.port, "/dev/ttyUSB1");
                assert_eq!(args.baud, 57_600);
                assert_eq!(args.frames, Some(10));
                assert_eq!(args.slots, 2);
            }
            other => panic!("expected watch, got {other:?}"),
        }
    }

    #[test]
    fn parses_replay_subcommand() {
        let cli = Cli::try_parse_from(["plotlink", "replay", "capture.bin", "--slots", "3"])
            .expect("replay args should parse");
        assert!(matches!(cli.command, Command::Replay(_)));
    }

    #[test]
    fn rejects_missing_port() {
        let err = Cli::try_parse_from(["plotlink", "watch"]).expect_err("missing port should fail");
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn parses_ports_subcommand() {
        let cli = Cli::try_parse_from(["plotlink", "ports", "--format", "json"])
            .expect("ports args should parse");
        assert!(matches!(cli.command, Command::Ports(_)));
    }
}
