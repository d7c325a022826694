//! Narration events and the sinks that receive them.
//!
//! Events describe state transitions (reshuffles, reversals, flows, busts,
//! joker wins, score changes) for a front-end to present. They carry no
//! control flow back into the engine.

pub mod event;
pub mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink, LogSink, NullSink};
