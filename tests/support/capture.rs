use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tally::ui::{Output, OutputMode};

/// Writer that appends to a shared buffer
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Output in `mode` whose text can be read back from the returned buffer
pub fn capture(mode: OutputMode) -> (Output, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let output = Output::with_writer(mode, Box::new(buffer.clone()));
    (output, buffer)
}
