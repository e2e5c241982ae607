//! Macros for declaring closed variant sets.

/// Declare a fieldless enum together with its `Variant` implementation.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug` and serde's `Serialize`/`Deserialize`.
///
/// # Example
///
/// ```
/// use patterns::{variant_enum, Variant};
///
/// variant_enum! {
///     pub enum Direction {
///         North,
///         South,
///     }
/// }
///
/// assert_eq!(Direction::North.tag(), "North");
/// ```
#[macro_export]
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::variant::Variant for $name {
            fn tag(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::variant::Variant;

    variant_enum! {
        enum TestKind {
            Alpha,
            Beta,
        }
    }

    #[test]
    fn variant_enum_generates_tags() {
        assert_eq!(TestKind::Alpha.tag(), "Alpha");
        assert_eq!(TestKind::Beta.tag(), "Beta");
    }

    #[test]
    fn variant_enum_supports_visibility() {
        variant_enum! {
            pub enum PublicKind {
                One,
            }
        }

        assert_eq!(PublicKind::One.tag(), "One");
    }

    #[test]
    fn variant_enum_is_copy_and_serializable() {
        let kind = TestKind::Beta;
        let copied = kind;
        assert_eq!(kind, copied);

        let json = serde_json::to_string(&kind).unwrap();
        let back: TestKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }
}
