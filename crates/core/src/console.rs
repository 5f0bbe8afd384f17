//! Line-oriented output channel shared by drivers and sinks.
//!
//! The examples are single-threaded, so the writer sits behind `Rc<RefCell<_>>`.
//! Cloning a `Console` hands out another handle to the same writer, which keeps
//! a driver's lines and a sink's emissions in the order they happened.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::error::DesignResult;

/// Render a demonstration line in the `"<Label> - <description>"` form.
pub fn render_line(label: &str, description: &str) -> String {
    format!("{label} - {description}")
}

/// Shared handle to a line writer.
#[derive(Clone)]
pub struct Console {
    writer: Rc<RefCell<dyn Write>>,
}

impl Console {
    /// Wrap an arbitrary writer.
    pub fn new(writer: Rc<RefCell<dyn Write>>) -> Self {
        Self { writer }
    }

    /// Console backed by the process's standard output.
    pub fn stdout() -> Self {
        Self::new(Rc::new(RefCell::new(std::io::stdout())))
    }

    /// Write one line (a trailing newline is appended).
    pub fn line(&self, text: &str) -> DesignResult<()> {
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "{text}")?;
        writer.flush()?;
        Ok(())
    }
}

impl core::fmt::Debug for Console {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
