//! Errors - error types and classification.
//!
//! Every failure in this crate is a rejected input detected synchronously at
//! construction time. Nothing here is retryable: the caller must supply
//! corrected inputs and build a new value.

use std::net::IpAddr;

use thiserror::Error;

/// ErrorKind is the coarse classification of an `McastError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

/// The specific reason an argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("mcast_ip cannot be absent")]
    MissingMcastIp,

    #[error("sink cannot be absent")]
    MissingSink,

    #[error("mcast_ip must be a multicast address, got {0}")]
    NotMulticast(IpAddr),

    #[error("mcast_ip is not a valid IP address: {0:?}")]
    MalformedMcastIp(String),

    #[error("sink is not a valid connect point (expected device/port): {0:?}")]
    MalformedSink(String),

    #[error("invalid device id: {0:?}")]
    InvalidDeviceId(String),

    #[error("invalid port number: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum McastError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

impl McastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            McastError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// The rejected-argument detail.
    pub fn reason(&self) -> &InvalidArgument {
        match self {
            McastError::InvalidArgument(reason) => reason,
        }
    }
}
