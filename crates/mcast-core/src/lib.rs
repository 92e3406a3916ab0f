//! mcast-core
//!
//! Addressing primitives for a controller's cache of pending multicast
//! events. An entry is keyed by `(multicast group, sink)`, where the sink is
//! the device port a receiver is attached to.
//!
//! # Modules
//! - **domain**: `McastCacheKey`, `ConnectPoint`, `DeviceId`, `PortNumber`, errors

pub mod domain;

pub use domain::{
    ConnectPoint, DeviceId, ErrorKind, InvalidArgument, McastCacheKey, McastError, PortNumber,
};
