use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use plotlink_proto::FrameReader;
use plotlink_trace::{Dispatcher, PlotState};
use plotlink_transport::{LinkConfig, SerialLink};
use tracing::info;

use crate::cmd::WatchArgs;
use crate::exit::{transport_error, CliError, CliResult, INTERNAL, SUCCESS, USAGE};
use crate::output::{print_text_event, ConsoleRenderer, OutputFormat};
use crate::pump::pump;

pub fn run(args: WatchArgs, format: OutputFormat) -> CliResult<i32> {
    if args.slots == 0 {
        return Err(CliError::new(USAGE, "--slots must be at least 1"));
    }

    let config = LinkConfig {
        baud_rate: args.baud,
        ..LinkConfig::default()
    };
    let link = SerialLink::open_with_config(&args.port, &config)
        .map_err(|err| transport_error("open failed", err))?;

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let mut reader = FrameReader::new(link);
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
        "watch finished"
    );

    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| CliError::new(INTERNAL, format!("signal handler setup failed: {err}")))
}
