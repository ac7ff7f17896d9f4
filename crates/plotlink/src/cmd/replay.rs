use std::fs::File;
use std::sync::atomic::AtomicBool;

use plotlink_proto::FrameReader;
use plotlink_trace::{Dispatcher, PlotState};
use plotlink_transport::StreamSource;
use tracing::info;

use crate::cmd::ReplayArgs;
use crate::exit::{io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_text_event, ConsoleRenderer, OutputFormat};
use crate::pump::pump;

pub fn run(args: ReplayArgs, format: OutputFormat) -> CliResult<i32> {
    if args.slots == 0 {
        return Err(CliError::new(USAGE, "--slots must be at least 1"));
    }

    let file = File::open(&args.file)
        .map_err(|err| io_error(&format!("failed opening {}", args.file.display()), err))?;

    let running = AtomicBool::new(true);
    let mut reader = FrameReader::new(StreamSource::new(file));
    let mut dispatcher = Dispatcher::new(PlotState::new(args.slots));
    let mut renderer = ConsoleRenderer::new(format);

    let summary = pump(
        &mut reader,
        &mut dispatcher,
        &mut renderer,
        &running,
        args.frames,
        |event| print_text_event(event, format),
    )?;

    info!(
        frames = summary.frames,
        decode_errors = summary.decode_errors,
        "replay finished"
    );

    Ok(SUCCESS)
}
