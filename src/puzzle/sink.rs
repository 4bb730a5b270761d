// src/puzzle/sink.rs

use log::info;

/// Destination for module log lines.
pub trait LogSink {
    fn emit(&mut self, line: &str);
}

/// Forwards every line to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn emit(&mut self, line: &str) {
        info!("{}", line);
    }
}

/// Prints every line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

impl LogSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Tags each line with the module instance it came from.
pub struct ModuleLogger<S: LogSink> {
    id: u32,
    sink: S,
}

impl<S: LogSink> ModuleLogger<S> {
    pub fn new(id: u32, sink: S) -> Self {
        ModuleLogger { id, sink }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn prefix(&self) -> String {
        format!("[Legendre Symbol #{}] ", self.id)
    }

    pub fn log(&mut self, message: &str) {
        let line = format!("{}{}", self.prefix(), message);
        self.sink.emit(&line);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
