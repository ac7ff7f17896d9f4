//! Trace-slot series state and command dispatch.
//!
//! Decoded [`plotlink_proto::Command`] values flow through a [`Dispatcher`]
//! that owns the [`PlotState`] — one [`Series`] per trace slot — and notifies
//! a [`Renderer`] collaborator after each mutation. Actual drawing lives
//! outside this crate; the renderer only ever sees a slot index and a
//! borrowed series.
//!
//! Single-writer, single-reader: the dispatcher mutates state, the renderer
//! reads it immediately afterward, nothing else touches it.

pub mod dispatch;
pub mod series;
pub mod state;

pub use dispatch::{DispatchError, Dispatcher, NullRenderer, Renderer, TextEvent, BYTE_BUFFER_SLOT};
pub use series::Series;
pub use state::{PlotState, DEFAULT_SLOT_COUNT};
