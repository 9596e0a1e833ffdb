//! Output channel for `print`.
//!
//! Where printed lines go is a property of the realm, not of `print`.
//! Native hosts write to stdout, embedding hosts and tests capture lines in
//! memory, and a silent handler drops everything.

use std::io::{self, Write};

use parking_lot::Mutex;

/// The print destination of a realm.
#[derive(Debug)]
pub enum PrintHandler {
    /// Locked process stdout.
    Stdout,
    /// Captured lines, without their terminators.
    Buffer(Mutex<Vec<String>>),
    /// Drops every line.
    Silent,
}

impl PrintHandler {
    /// Emit `line` followed by a newline.
    ///
    /// Stdout I/O failures (closed pipe, full disk) are logged and dropped;
    /// `print` never fails from script code's point of view.
    pub fn write_line(&self, line: &str) {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
                    tracing::warn!(%err, "failed to write print output to stdout");
                }
            }
            Self::Buffer(lines) => lines.lock().push(line.to_owned()),
            Self::Silent => {}
        }
    }

    /// Captured output, each line newline-terminated.
    ///
    /// Empty for handlers that don't capture.
    pub fn output(&self) -> String {
        let Self::Buffer(lines) = self else {
            return String::new();
        };
        lines.lock().iter().fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
    }

    #[expect(
        clippy::disallowed_types,
        reason = "the handler is shared between a realm and its host"
    )]
    fn shared(self) -> SharedPrintHandler {
        std::sync::Arc::new(self)
    }
}

/// Print handler shared between a realm and its host.
#[expect(
    clippy::disallowed_types,
    reason = "the handler is shared between a realm and its host"
)]
pub type SharedPrintHandler = std::sync::Arc<PrintHandler>;

/// Handler writing to stdout. This is the default.
pub fn stdout_handler() -> SharedPrintHandler {
    PrintHandler::Stdout.shared()
}

/// Handler capturing output for `PrintHandler::output`.
pub fn buffer_handler() -> SharedPrintHandler {
    PrintHandler::Buffer(Mutex::new(Vec::new())).shared()
}

/// Handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    PrintHandler::Silent.shared()
}
