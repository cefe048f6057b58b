//! Serial console adapter over any [`std::io::Write`] (stdout in the
//! simulator).  Output is line-buffered by the caller: telemetry hands
//! over whole newline-terminated records.

use std::io::Write;

use log::warn;

use crate::app::ports::SerialPort;

pub struct ConsoleSerial<W> {
    out: W,
}

impl ConsoleSerial<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleSerial<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, bytes: &[u8]) {
        if let Err(e) = self.out.write_all(bytes).and_then(|()| self.out.flush()) {
            warn!("serial write failed: {}", e);
        }
    }
}

impl<W: Write> SerialPort for ConsoleSerial<W> {
    fn send_text(&mut self, text: &str) {
        self.write(text.as_bytes());
    }

    fn send_integer(&mut self, value: i64) {
        self.write(value.to_string().as_bytes());
    }
}
