//! Domain model: the multicast event cache key and the connect point it names.

pub mod cache_key;
pub mod connect_point;
pub mod errors;
pub mod ids;

pub use cache_key::McastCacheKey;
pub use connect_point::ConnectPoint;
pub use errors::{ErrorKind, InvalidArgument, McastError};
pub use ids::{DeviceId, PortNumber};
