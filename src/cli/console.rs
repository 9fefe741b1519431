use std::io::{self, IsTerminal, Write};

use crate::compress::StatusReporter;

/// Status line on stderr, erased again on `clear` when stderr is a terminal
#[derive(Debug)]
pub struct ConsoleStatus {
    interactive: bool,
    showing: bool,
}

impl ConsoleStatus {
    pub fn new() -> Self {
        Self {
            interactive: io::stderr().is_terminal(),
            showing: false,
        }
    }
}

impl Default for ConsoleStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for ConsoleStatus {
    fn show(&mut self, text: &str) {
        let mut stderr = io::stderr().lock();
        if self.interactive {
            let _ = write!(stderr, "\r\x1b[2K{}", text);
        } else {
            let _ = writeln!(stderr, "{}", text);
        }
        let _ = stderr.flush();
        self.showing = true;
    }

    fn clear(&mut self) {
        if self.showing && self.interactive {
            let mut stderr = io::stderr().lock();
            let _ = write!(stderr, "\r\x1b[2K");
            let _ = stderr.flush();
        }
        self.showing = false;
    }
}
