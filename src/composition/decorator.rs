//! Data source decorators.
//!
//! A decorator owns exactly one wrapped source and transforms data on the
//! way in and on the way out. Stacking is last-applied-outermost: the
//! outermost decorator transforms input first and output last.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when reading through a decorator stack.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// Stored data is not valid Base64
    #[error("Decoding failed: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Decoded bytes are not valid UTF-8
    #[error("Decoded data is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Storage capability shared by base sources and decorators.
pub trait DataSource {
    fn write_data(&mut self, data: &str);

    fn read_data(&self) -> Result<String, DataSourceError>;
}

/// Base source keeping the last written value in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryDataSource {
    data: String,
}

impl MemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored value, exactly as written by the layer above.
    pub fn raw(&self) -> &str {
        &self.data
    }
}

impl DataSource for MemoryDataSource {
    fn write_data(&mut self, data: &str) {
        debug!(bytes = data.len(), "Writing data");
        self.data = data.to_string();
    }

    fn read_data(&self) -> Result<String, DataSourceError> {
        Ok(self.data.clone())
    }
}

/// Base64-encodes on write and decodes on read.
///
/// # Example
///
/// ```rust
/// use patterns::composition::{DataSource, EncryptionDecorator, MemoryDataSource};
///
/// let mut source = EncryptionDecorator::new(MemoryDataSource::new());
/// source.write_data("Important info");
///
/// assert_eq!(source.inner().raw(), "SW1wb3J0YW50IGluZm8=");
/// assert_eq!(source.read_data().unwrap(), "Important info");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EncryptionDecorator<D> {
    wrapped: D,
}

impl<D: DataSource> EncryptionDecorator<D> {
    pub fn new(wrapped: D) -> Self {
        Self { wrapped }
    }

    pub fn inner(&self) -> &D {
        &self.wrapped
    }

    pub fn into_inner(self) -> D {
        self.wrapped
    }
}

impl<D: DataSource> DataSource for EncryptionDecorator<D> {
    fn write_data(&mut self, data: &str) {
        self.wrapped.write_data(&encode(data));
    }

    fn read_data(&self) -> Result<String, DataSourceError> {
        decode(&self.wrapped.read_data()?)
    }
}

/// Rotates ASCII letters by 13 places in both directions.
#[derive(Clone, Debug, Default)]
pub struct Rot13Decorator<D> {
    wrapped: D,
}

impl<D: DataSource> Rot13Decorator<D> {
    pub fn new(wrapped: D) -> Self {
        Self { wrapped }
    }

    pub fn inner(&self) -> &D {
        &self.wrapped
    }

    pub fn into_inner(self) -> D {
        self.wrapped
    }
}

impl<D: DataSource> DataSource for Rot13Decorator<D> {
    fn write_data(&mut self, data: &str) {
        self.wrapped.write_data(&rot13(data));
    }

    fn read_data(&self) -> Result<String, DataSourceError> {
        Ok(rot13(&self.wrapped.read_data()?))
    }
}

impl<D: DataSource + ?Sized> DataSource for Box<D> {
    fn write_data(&mut self, data: &str) {
        (**self).write_data(data);
    }

    fn read_data(&self) -> Result<String, DataSourceError> {
        (**self).read_data()
    }
}

pub(crate) fn encode(data: &str) -> String {
    STANDARD.encode(data.as_bytes())
}

pub(crate) fn decode(data: &str) -> Result<String, DataSourceError> {
    let bytes = STANDARD.decode(data)?;
    Ok(String::from_utf8(bytes)?)
}

fn rot13(data: &str) -> String {
    data.chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_decorators_round_trip() {
        let mut source = Rot13Decorator::new(EncryptionDecorator::new(MemoryDataSource::new()));

        source.write_data("secret");

        assert_eq!(source.read_data().unwrap(), "secret");
    }

    #[test]
    fn outermost_decorator_transforms_input_first() {
        let mut source = Rot13Decorator::new(EncryptionDecorator::new(MemoryDataSource::new()));

        source.write_data("secret");

        // rot13("secret") == "frperg", then Base64
        let stored = source.inner().inner().raw().to_string();
        assert_eq!(stored, encode("frperg"));
        assert_eq!(source.inner().read_data().unwrap(), "frperg");
    }

    #[test]
    fn order_of_application_changes_stored_form() {
        let mut rot_inside = EncryptionDecorator::new(Rot13Decorator::new(MemoryDataSource::new()));
        let mut rot_outside =
            Rot13Decorator::new(EncryptionDecorator::new(MemoryDataSource::new()));

        rot_inside.write_data("secret");
        rot_outside.write_data("secret");

        assert_ne!(
            rot_inside.inner().inner().raw(),
            rot_outside.inner().inner().raw()
        );
        assert_eq!(rot_inside.read_data().unwrap(), "secret");
        assert_eq!(rot_outside.read_data().unwrap(), "secret");
    }

    #[test]
    fn undecorated_source_stores_plain_text() {
        let mut source = MemoryDataSource::new();
        source.write_data("Important info");
        assert_eq!(source.raw(), "Important info");
        assert_eq!(source.read_data().unwrap(), "Important info");
    }

    #[test]
    fn corrupt_storage_surfaces_decode_error() {
        let mut base = MemoryDataSource::new();
        base.write_data("not base64!");
        let source = EncryptionDecorator::new(base);

        assert!(matches!(source.read_data(), Err(DataSourceError::Decode(_))));
    }

    #[test]
    fn boxed_sources_can_be_stacked_dynamically() {
        let base: Box<dyn DataSource> = Box::new(MemoryDataSource::new());
        let mut source = EncryptionDecorator::new(base);

        source.write_data("dyn");

        assert_eq!(source.read_data().unwrap(), "dyn");
    }

    #[test]
    fn rot13_is_an_involution_on_letters() {
        assert_eq!(rot13("Hello, World!"), "Uryyb, Jbeyq!");
        assert_eq!(rot13(&rot13("Hello, World!")), "Hello, World!");
    }
}
