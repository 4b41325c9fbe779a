//! Board engine
//!
//! The grid of rows, the cursor and the answer, driven one input event at a
//! time. Validation and scoring happen on submit; every visible change is
//! reported to a [`BoardObserver`].

mod engine;
mod event;
mod stats;

pub use engine::{BoardEngine, EngineError, Phase};
pub use event::{BoardObserver, Cue, GameStatus, InputEvent, Notification};
pub use stats::Statistics;
