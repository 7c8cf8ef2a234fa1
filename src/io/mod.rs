//! Host-facing I/O: the text dialog port and the results render sink.

pub mod port;
pub mod render;

pub use port::{Exchange, Port, ScriptedPort, TerminalPort};
pub use render::{RecordingSink, Region, RenderSink, TerminalSink};

/// The host side of a game call: dialog port plus render sink.
pub struct Host<'a> {
    pub port: &'a mut dyn Port,
    pub sink: &'a mut dyn RenderSink,
}

impl<'a> Host<'a> {
    /// Bundle a port and sink for one call.
    pub fn new(port: &'a mut dyn Port, sink: &'a mut dyn RenderSink) -> Self {
        Self { port, sink }
    }
}
