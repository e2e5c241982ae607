//! Composition and containment.
//!
//! Objects hold other objects of the same (or a narrower) capability and
//! delegate to them:
//! - **Composite**: fan an operation out to every child, in order
//! - **Decorator**: wrap exactly one source, transforming on the way through
//! - **Bridge**: an abstraction delegating to an implementation it holds
//! - **Proxy**, **Adapter** and a resettable **Iterator**

mod adapter;
mod bridge;
mod canvas;
mod composite;
mod decorator;
mod iterator;
mod proxy;

pub use adapter::{AdapterError, ListView, ListViewData, ListViewDataAdapter, RemoteData};
pub use bridge::{
    clamp_level, AdvancedRemote, BasicRemote, Device, DeviceSettings, Radio, Remote, Tv,
    MAX_LEVEL, MIN_LEVEL,
};
pub use canvas::Canvas;
pub use composite::{LineView, TextView, View, ViewGroup};
pub use decorator::{
    DataSource, DataSourceError, EncryptionDecorator, MemoryDataSource, Rot13Decorator,
};
pub use iterator::{Friend, MyFriends};
pub use proxy::{FileStore, ProxyFileStore, RemoteFileStore};
