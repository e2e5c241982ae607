//! Proxy in front of a third-party file store.

use super::decorator::{decode, encode, DataSourceError};
use tracing::debug;

/// File access offered by a third-party store.
pub trait FileStore {
    fn get_file(&self) -> String;
}

/// Store that hands out its file name Base64-encoded.
#[derive(Clone, Debug)]
pub struct RemoteFileStore {
    file_name: String,
}

impl RemoteFileStore {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl Default for RemoteFileStore {
    fn default() -> Self {
        Self::new("confidential.txt")
    }
}

impl FileStore for RemoteFileStore {
    fn get_file(&self) -> String {
        encode(&self.file_name)
    }
}

/// Same interface as the store it fronts, plus a decoding shortcut.
///
/// # Example
///
/// ```rust
/// use patterns::composition::{FileStore, ProxyFileStore, RemoteFileStore};
///
/// let proxy = ProxyFileStore::new(RemoteFileStore::default());
///
/// assert_eq!(proxy.get_file(), "Y29uZmlkZW50aWFsLnR4dA==");
/// assert_eq!(proxy.get_file_and_decode().unwrap(), "confidential.txt");
/// ```
#[derive(Clone, Debug)]
pub struct ProxyFileStore<S> {
    store: S,
}

impl<S: FileStore> ProxyFileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_file_and_decode(&self) -> Result<String, DataSourceError> {
        let file = self.get_file();
        debug!(encoded = %file, "Decoding proxied file");
        decode(&file)
    }
}

impl<S: FileStore> FileStore for ProxyFileStore<S> {
    fn get_file(&self) -> String {
        self.store.get_file()
    }
}
