//! Chain of responsibility over a view tree.
//!
//! A node offers an event to its own handler first, then to its children
//! left to right, depth first. The first handler that accepts stops the
//! whole traversal.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Touch event delivered to a view tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct TouchEvent {
    pub x: i32,
    pub y: i32,
}

/// Per-node decision whether to consume an event.
pub trait TouchHandler {
    /// Name used in traces.
    fn name(&self) -> &str;

    /// Return `true` to consume the event and stop propagation.
    fn on_event(&self, event: &TouchEvent) -> bool;
}

/// Text that never consumes touches.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextView;

impl TouchHandler for TextView {
    fn name(&self) -> &str {
        "TextView"
    }

    fn on_event(&self, _event: &TouchEvent) -> bool {
        false
    }
}

/// Button that consumes every touch.
#[derive(Clone, Copy, Debug, Default)]
pub struct Button;

impl TouchHandler for Button {
    fn name(&self) -> &str {
        "Button"
    }

    fn on_event(&self, _event: &TouchEvent) -> bool {
        true
    }
}

/// A node in the view tree: one handler plus ordered children.
///
/// # Example
///
/// ```rust
/// use patterns::dispatch::{Button, TextView, TouchEvent, ViewNode};
///
/// let chain = ViewNode::new(TextView).with_child(
///     ViewNode::new(TextView)
///         .with_child(ViewNode::new(Button).with_child(ViewNode::new(TextView))),
/// );
///
/// assert!(chain.handle_touch_event(&TouchEvent::default()));
/// assert!(!ViewNode::new(TextView).handle_touch_event(&TouchEvent::default()));
/// ```
pub struct ViewNode {
    handler: Box<dyn TouchHandler>,
    children: Vec<ViewNode>,
}

impl ViewNode {
    /// Create a leaf node.
    pub fn new<H>(handler: H) -> Self
    where
        H: TouchHandler + 'static,
    {
        Self {
            handler: Box::new(handler),
            children: Vec::new(),
        }
    }

    /// Create a node with its children in traversal order.
    pub fn with_children<H>(handler: H, children: Vec<ViewNode>) -> Self
    where
        H: TouchHandler + 'static,
    {
        Self {
            handler: Box::new(handler),
            children,
        }
    }

    /// Append a child after the existing ones.
    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Offer the event to this node, then to each subtree in order.
    ///
    /// Returns `true` as soon as any handler consumes the event; nodes after
    /// it are never visited. Returns `false` once every node has declined.
    pub fn handle_touch_event(&self, event: &TouchEvent) -> bool {
        trace!(handler = self.handler.name(), "Offering touch event");
        if self.handler.on_event(event) {
            debug!(handler = self.handler.name(), "Touch event handled");
            return true;
        }

        self.children
            .iter()
            .any(|child| child.handle_touch_event(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Handler that records every visit into a shared log.
    struct Probe {
        name: &'static str,
        handles: bool,
        visits: Rc<RefCell<Vec<&'static str>>>,
    }

    impl TouchHandler for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn on_event(&self, _event: &TouchEvent) -> bool {
            self.visits.borrow_mut().push(self.name);
            self.handles
        }
    }

    fn probe(
        name: &'static str,
        handles: bool,
        visits: &Rc<RefCell<Vec<&'static str>>>,
    ) -> Probe {
        Probe {
            name,
            handles,
            visits: Rc::clone(visits),
        }
    }

    #[test]
    fn stops_at_first_handler() {
        let visits = Rc::new(RefCell::new(Vec::new()));
        let chain = ViewNode::new(probe("A", false, &visits)).with_child(
            ViewNode::new(probe("B", false, &visits)).with_child(
                ViewNode::new(probe("C", true, &visits))
                    .with_child(ViewNode::new(probe("D", false, &visits))),
            ),
        );

        assert!(chain.handle_touch_event(&TouchEvent::default()));
        assert_eq!(*visits.borrow(), vec!["A", "B", "C"]);
    }

    #[test]
    fn returns_false_after_visiting_all() {
        let visits = Rc::new(RefCell::new(Vec::new()));
        let chain = ViewNode::with_children(
            probe("A", false, &visits),
            vec![
                ViewNode::new(probe("B", false, &visits)),
                ViewNode::new(probe("C", false, &visits)),
            ],
        );

        assert!(!chain.handle_touch_event(&TouchEvent { x: 3, y: 4 }));
        assert_eq!(*visits.borrow(), vec!["A", "B", "C"]);
    }

    #[test]
    fn traverses_depth_first_left_to_right() {
        let visits = Rc::new(RefCell::new(Vec::new()));
        let chain = ViewNode::with_children(
            probe("root", false, &visits),
            vec![
                ViewNode::with_children(
                    probe("left", false, &visits),
                    vec![
                        ViewNode::new(probe("left.0", false, &visits)),
                        ViewNode::new(probe("left.1", false, &visits)),
                    ],
                ),
                ViewNode::with_children(
                    probe("right", false, &visits),
                    vec![ViewNode::new(probe("right.0", true, &visits))],
                ),
                ViewNode::new(probe("unreached", true, &visits)),
            ],
        );

        assert!(chain.handle_touch_event(&TouchEvent::default()));
        assert_eq!(
            *visits.borrow(),
            vec!["root", "left", "left.0", "left.1", "right", "right.0"]
        );
    }

    #[test]
    fn node_offers_itself_before_children() {
        let visits = Rc::new(RefCell::new(Vec::new()));
        let chain = ViewNode::new(probe("parent", true, &visits))
            .with_child(ViewNode::new(probe("child", true, &visits)));

        assert!(chain.handle_touch_event(&TouchEvent::default()));
        assert_eq!(*visits.borrow(), vec!["parent"]);
    }

    #[test]
    fn stock_handlers() {
        let event = TouchEvent::default();
        assert!(!TextView.on_event(&event));
        assert!(Button.on_event(&event));
        assert!(ViewNode::new(TextView)
            .with_child(ViewNode::new(Button))
            .handle_touch_event(&event));
    }
}
