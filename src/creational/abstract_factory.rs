//! Abstract factory: one factory per transport family.
//!
//! A family factory only builds its own kinds and rejects the rest with
//! [`FactoryError::UnsupportedVariant`]; it never substitutes a default.

use super::error::FactoryError;
use super::factory::Transport;
use crate::variant::Variant;
use tracing::{debug, warn};

crate::variant_enum! {
    /// Kinds across the road and sea families.
    pub enum TransportType {
        Car,
        Motorbike,
        Ship,
        Boat,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Car;

impl Transport for Car {
    fn deliver(&self) -> String {
        "Deliver by car".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Motorbike;

impl Transport for Motorbike {
    fn deliver(&self) -> String {
        "Deliver by motorbike".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ship;

impl Transport for Ship {
    fn deliver(&self) -> String {
        "Deliver by ship".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Boat;

impl Transport for Boat {
    fn deliver(&self) -> String {
        "Deliver by boat".to_string()
    }
}

/// Factory for one family of transports.
pub trait TransportFactory {
    fn make_transport(&self, kind: TransportType) -> Result<Box<dyn Transport>, FactoryError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RoadTransportFactory;

impl RoadTransportFactory {
    const NAME: &'static str = "RoadTransportFactory";
}

impl TransportFactory for RoadTransportFactory {
    fn make_transport(&self, kind: TransportType) -> Result<Box<dyn Transport>, FactoryError> {
        match kind {
            TransportType::Car => Ok(Box::new(Car)),
            TransportType::Motorbike => Ok(Box::new(Motorbike)),
            TransportType::Ship | TransportType::Boat => Err(unsupported(Self::NAME, kind)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SeaTransportFactory;

impl SeaTransportFactory {
    const NAME: &'static str = "SeaTransportFactory";
}

impl TransportFactory for SeaTransportFactory {
    fn make_transport(&self, kind: TransportType) -> Result<Box<dyn Transport>, FactoryError> {
        match kind {
            TransportType::Ship => Ok(Box::new(Ship)),
            TransportType::Boat => Ok(Box::new(Boat)),
            TransportType::Car | TransportType::Motorbike => Err(unsupported(Self::NAME, kind)),
        }
    }
}

fn unsupported(factory: &'static str, kind: TransportType) -> FactoryError {
    warn!(factory, kind = kind.tag(), "Unsupported transport kind");
    FactoryError::UnsupportedVariant {
        factory,
        variant: kind.tag().to_string(),
    }
}

/// Picks the family factory for a kind, then delegates to it.
///
/// # Example
///
/// ```rust
/// use patterns::creational::abstract_factory::{LogisticRouter, TransportType};
///
/// let transport = LogisticRouter::create_transport(TransportType::Car).unwrap();
/// assert_eq!(transport.deliver(), "Deliver by car");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LogisticRouter;

impl LogisticRouter {
    pub fn factory_for(kind: TransportType) -> Box<dyn TransportFactory> {
        match kind {
            TransportType::Car | TransportType::Motorbike => Box::new(RoadTransportFactory),
            TransportType::Ship | TransportType::Boat => Box::new(SeaTransportFactory),
        }
    }

    pub fn create_transport(kind: TransportType) -> Result<Box<dyn Transport>, FactoryError> {
        debug!(kind = kind.tag(), "Routing transport request");
        Self::factory_for(kind).make_transport(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn road_factory_builds_road_kinds() {
        let factory = RoadTransportFactory;
        assert_eq!(
            factory.make_transport(TransportType::Car).unwrap().deliver(),
            "Deliver by car"
        );
        assert_eq!(
            factory
                .make_transport(TransportType::Motorbike)
                .unwrap()
                .deliver(),
            "Deliver by motorbike"
        );
    }

    #[test]
    fn road_factory_rejects_sea_kinds() {
        let result = RoadTransportFactory.make_transport(TransportType::Ship);

        assert_eq!(
            result.err(),
            Some(FactoryError::UnsupportedVariant {
                factory: "RoadTransportFactory",
                variant: "Ship".to_string(),
            })
        );
    }

    #[test]
    fn sea_factory_rejects_road_kinds() {
        assert!(SeaTransportFactory
            .make_transport(TransportType::Motorbike)
            .is_err());
        assert_eq!(
            SeaTransportFactory
                .make_transport(TransportType::Boat)
                .unwrap()
                .deliver(),
            "Deliver by boat"
        );
    }

    #[test]
    fn router_always_finds_a_family() {
        for kind in [
            TransportType::Car,
            TransportType::Motorbike,
            TransportType::Ship,
            TransportType::Boat,
        ] {
            assert!(LogisticRouter::create_transport(kind).is_ok());
        }
    }

    #[test]
    fn error_message_names_factory_and_kind() {
        let err = unsupported("SeaTransportFactory", TransportType::Car);
        assert_eq!(err.to_string(), "SeaTransportFactory cannot build transport 'Car'");
    }
}
