//! Variant tags for closed sets of values.
//!
//! Every closed hierarchy in this crate (states, notification payloads,
//! visitable items, transport kinds) is an enum. The `Variant` trait gives
//! each member a stable, human-readable tag used for logging and display.

/// A member of a closed set of variants.
///
/// # Example
///
/// ```rust
/// use patterns::Variant;
///
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl Variant for Light {
///     fn tag(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///         }
///     }
/// }
///
/// assert_eq!(Light::Red.tag(), "Red");
/// ```
pub trait Variant {
    /// The discriminant name of this value.
    fn tag(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Shape {
        Circle(f64),
        Square,
    }

    impl Variant for Shape {
        fn tag(&self) -> &str {
            match self {
                Self::Circle(_) => "Circle",
                Self::Square => "Square",
            }
        }
    }

    #[test]
    fn tag_ignores_payload() {
        assert_eq!(Shape::Circle(1.0).tag(), "Circle");
        assert_eq!(Shape::Circle(2.5).tag(), "Circle");
        assert_eq!(Shape::Square.tag(), "Square");
    }
}
