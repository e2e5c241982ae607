//! Output sink for side-effecting render operations.

/// Ordered record of everything drawn onto it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Canvas {
    lines: Vec<String>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
