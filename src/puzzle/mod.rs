// src/puzzle/mod.rs

pub mod answer;
pub mod command;
pub mod module;
pub mod sink;

pub use answer::Answer;
pub use module::{LegendreModule, PressOutcome, Round};
pub use sink::{LogCrateSink, LogSink, ModuleLogger, StdoutSink};
