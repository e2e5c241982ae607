//! Composite views: groups draw themselves and then every child.

use super::canvas::Canvas;
use tracing::trace;

/// Anything that can be drawn at a position.
pub trait View {
    fn position(&self) -> (i32, i32);

    fn draw(&self, canvas: &mut Canvas);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineView {
    pub x: i32,
    pub y: i32,
}

impl View for LineView {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.draw(format!("Draw line to {}, {}", self.x, self.y));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextView {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

impl TextView {
    pub fn new(x: i32, y: i32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }
}

impl View for TextView {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.draw(format!("Draw text {} to {}, {}", self.text, self.x, self.y));
    }
}

/// View holding an ordered, fixed list of child views.
///
/// # Example
///
/// ```rust
/// use patterns::composition::{Canvas, LineView, TextView, View, ViewGroup};
///
/// let group = ViewGroup::new(
///     1,
///     0,
///     vec![
///         Box::new(LineView { x: 10, y: 10 }),
///         Box::new(TextView::new(10, 20, "Hello")),
///     ],
/// );
///
/// let mut canvas = Canvas::new();
/// group.draw(&mut canvas);
///
/// assert_eq!(
///     canvas.lines(),
///     &["Draw view group to 1, 0", "Draw line to 10, 10", "Draw text Hello to 10, 20"]
/// );
/// ```
pub struct ViewGroup {
    x: i32,
    y: i32,
    children: Vec<Box<dyn View>>,
}

impl ViewGroup {
    pub fn new(x: i32, y: i32, children: Vec<Box<dyn View>>) -> Self {
        Self { x, y, children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl View for ViewGroup {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn draw(&self, canvas: &mut Canvas) {
        trace!(children = self.children.len(), "Drawing view group");
        canvas.draw(format!("Draw view group to {}, {}", self.x, self.y));
        for child in &self.children {
            child.draw(canvas);
        }
    }
}
