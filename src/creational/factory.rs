//! Factory method over a closed set of transport kinds.

use crate::variant::Variant;
use tracing::debug;

crate::variant_enum! {
    /// Kinds the logistic factory can always build.
    pub enum TransportType {
        Truck,
        Ship,
    }
}

/// Something that can deliver cargo.
pub trait Transport {
    /// Human-readable delivery description, e.g. `"Deliver by truck"`.
    fn deliver(&self) -> String;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Truck;

impl Transport for Truck {
    fn deliver(&self) -> String {
        "Deliver by truck".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ship;

impl Transport for Ship {
    fn deliver(&self) -> String {
        "Deliver by ship".to_string()
    }
}

/// Maps every [`TransportType`] to its product.
///
/// # Example
///
/// ```rust
/// use patterns::creational::factory::{LogisticFactory, TransportType};
///
/// let transport = LogisticFactory::create_transport(TransportType::Truck);
/// assert_eq!(transport.deliver(), "Deliver by truck");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LogisticFactory;

impl LogisticFactory {
    pub fn create_transport(kind: TransportType) -> Box<dyn Transport> {
        debug!(kind = kind.tag(), "Creating transport");
        match kind {
            TransportType::Truck => Box::new(Truck),
            TransportType::Ship => Box::new(Ship),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_maps_to_its_product() {
        assert_eq!(
            LogisticFactory::create_transport(TransportType::Truck).deliver(),
            "Deliver by truck"
        );
        assert_eq!(
            LogisticFactory::create_transport(TransportType::Ship).deliver(),
            "Deliver by ship"
        );
    }
}
