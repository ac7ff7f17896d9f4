use std::borrow::Cow;

use plotlink_proto::Command;
use tracing::debug;

use crate::series::Series;
use crate::state::PlotState;

/// BYTE_BUFFER frames always target this slot; the trace index is baked
/// into the instrument firmware, not carried on the wire.
pub const BYTE_BUFFER_SLOT: usize = 1;

/// The external plotting collaborator.
///
/// Called once per state-mutating command with the affected slot and its
/// current series. Implementations draw, print, or record — this crate does
/// not care.
pub trait Renderer {
    fn refresh(&mut self, slot: usize, series: &Series);
}

/// A renderer that does nothing. Useful for tests and headless decoding.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn refresh(&mut self, _slot: usize, _series: &Series) {}
}

/// A text message emitted by the instrument, destined for an external
/// logger. Carries no series data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEvent {
    pub id: u8,
    pub message: Vec<u8>,
}

impl TextEvent {
    /// The message as UTF-8, with invalid sequences replaced.
    pub fn message_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.message)
    }
}

/// Errors that can occur applying a decoded command to plot state.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The frame named a trace slot outside the configured panel count.
    #[error("trace slot {slot} out of range ({slots} slots configured)")]
    TraceOutOfRange { slot: usize, slots: usize },
}

/// Applies decoded commands to the plot state and notifies the renderer.
///
/// One state per command, every transition returning to idle: dispatch a
/// command, mutate (or don't), refresh (or don't), done.
pub struct Dispatcher {
    state: PlotState,
}

impl Dispatcher {
    pub fn new(state: PlotState) -> Self {
        Self { state }
    }

    /// Borrow the current plot state.
    pub fn state(&self) -> &PlotState {
        &self.state
    }

    /// Apply one command.
    ///
    /// Returns the [`TextEvent`] for TEXT_MSG frames, `None` otherwise.
    /// An out-of-range trace slot leaves all state untouched and is reported
    /// as a recoverable error — the stream keeps flowing.
    pub fn dispatch<R: Renderer>(
        &mut self,
        command: Command,
        renderer: &mut R,
    ) -> Result<Option<TextEvent>, DispatchError> {
        match command {
            // No decoded effect: the renderer's next draw handles clearing.
            Command::Clear => Ok(None),
            Command::SetVisible | Command::SetStepTime | Command::SetTime => Ok(None),

            Command::Plot { trace, samples } => {
                let slot = trace as usize;
                let slots = self.state.slot_count();
                let series = self
                    .state
                    .slot_mut(slot)
                    .ok_or(DispatchError::TraceOutOfRange { slot, slots })?;
                series.replace(samples);
                debug!(slot, samples = series.len(), "replaced series");
                renderer.refresh(slot, series);
                Ok(None)
            }

            Command::ByteBuffer { values } => {
                let slots = self.state.slot_count();
                let series = self.state.slot_mut(BYTE_BUFFER_SLOT).ok_or(
                    DispatchError::TraceOutOfRange {
                        slot: BYTE_BUFFER_SLOT,
                        slots,
                    },
                )?;
                for value in values {
                    series.append_auto(f64::from(value));
                }
                debug!(
                    slot = BYTE_BUFFER_SLOT,
                    samples = series.len(),
                    "appended buffer values"
                );
                renderer.refresh(BYTE_BUFFER_SLOT, series);
                Ok(None)
            }

            Command::TextMsg { id, message } => Ok(Some(TextEvent { id, message })),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(PlotState::default())
    }
}
