use std::sync::atomic::{AtomicBool, Ordering};

use plotlink_proto::{FrameReader, ProtoError};
use plotlink_trace::{Dispatcher, Renderer, TextEvent};
use plotlink_transport::{ByteSource, TransportError};
use tracing::{info, warn};

use crate::exit::{proto_error, CliResult};

/// Counters from one decode-loop run.
#[derive(Debug, Default, Clone, Copy)]
pub struct PumpSummary {
    pub frames: usize,
    pub decode_errors: usize,
}

/// The main decode loop: await a frame, dispatch it, render, repeat.
///
/// Best-effort by design — recoverable decode errors (unknown command,
/// size misalignment, out-of-range trace slot) are logged and the loop
/// resumes signature search from the current stream position. The loop ends
/// when the stream ends, when `running` is cleared, or after `max_frames`
/// frames. Only transport failures abort it.
pub fn pump<S, R>(
    reader: &mut FrameReader<S>,
    dispatcher: &mut Dispatcher,
    renderer: &mut R,
    running: &AtomicBool,
    max_frames: Option<usize>,
    mut on_text: impl FnMut(&TextEvent),
) -> CliResult<PumpSummary>
where
    S: ByteSource,
    R: Renderer,
{
    let mut summary = PumpSummary::default();

    while running.load(Ordering::SeqCst) {
        let command = match reader.next_command() {
            Ok(command) => command,
            Err(ProtoError::Transport(TransportError::Disconnected)) => {
                info!("stream ended");
                break;
            }
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "decode error; resynchronizing");
                summary.decode_errors += 1;
                continue;
            }
            Err(err) => return Err(proto_error("read failed", err)),
        };

        match dispatcher.dispatch(command, renderer) {
            Ok(Some(event)) => on_text(&event),
            Ok(None) => {}
            Err(err) => {
                warn!(error = %err, "frame rejected");
                summary.decode_errors += 1;
            }
        }

        summary.frames += 1;
        if let Some(max) = max_frames {
            if summary.frames >= max {
                break;
            }
        }
    }

    Ok(summary)
}
