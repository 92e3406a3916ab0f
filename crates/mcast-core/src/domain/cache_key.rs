//! McastCacheKey - key of the multicast event cache.
//!
//! A pending multicast event is addressed by the group it belongs to and the
//! sink it affects. The key is validated once, at construction, and never
//! changes afterwards: re-addressing an entry means building a new key.
//!
//! # Invariants
//! - `mcast_ip` is a multicast address (IPv4 224.0.0.0/4, IPv6 ff00::/8).
//! - Equality, ordering and hashing cover `(mcast_ip, sink)` in that order,
//!   so the key works for `HashMap`, `HashSet` and `BTreeMap` alike.
//! - Deserialized keys go through the same checks as constructed ones.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::connect_point::ConnectPoint;
use super::errors::{InvalidArgument, McastError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMcastCacheKey")]
pub struct McastCacheKey {
    mcast_ip: IpAddr,
    sink: ConnectPoint,
}

impl McastCacheKey {
    /// Builds a key for the given group and sink.
    ///
    /// Fails with `InvalidArgument::NotMulticast` when `mcast_ip` is a
    /// unicast, broadcast or otherwise non-multicast address.
    pub fn new(mcast_ip: impl Into<IpAddr>, sink: ConnectPoint) -> Result<Self, McastError> {
        let mcast_ip = mcast_ip.into();
        if !mcast_ip.is_multicast() {
            tracing::trace!(%mcast_ip, %sink, "rejecting non-multicast group address");
            return Err(InvalidArgument::NotMulticast(mcast_ip).into());
        }
        Ok(Self { mcast_ip, sink })
    }

    /// Builds a key from inputs that may be missing.
    ///
    /// Checks run in a fixed order: group present, sink present, group is
    /// multicast. The first failing check is reported.
    pub fn from_parts(
        mcast_ip: Option<IpAddr>,
        sink: Option<ConnectPoint>,
    ) -> Result<Self, McastError> {
        let mcast_ip = mcast_ip.ok_or(InvalidArgument::MissingMcastIp)?;
        let sink = sink.ok_or(InvalidArgument::MissingSink)?;
        Self::new(mcast_ip, sink)
    }

    /// Builds a key from textual input such as `"239.1.1.1"` and
    /// `"of:0000000000000001/3"`.
    pub fn parse(mcast_ip: &str, sink: &str) -> Result<Self, McastError> {
        let ip = mcast_ip
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| InvalidArgument::MalformedMcastIp(mcast_ip.to_string()))?;
        let sink = sink.trim().parse::<ConnectPoint>()?;
        Self::new(ip, sink)
    }

    pub fn mcast_ip(&self) -> IpAddr {
        self.mcast_ip
    }

    pub fn sink(&self) -> &ConnectPoint {
        &self.sink
    }

    /// Deterministic hash of `(mcast_ip, sink)`.
    ///
    /// Uses a fixed-key SipHash, so the value is stable for the lifetime of
    /// the process and across processes built with the same toolchain. It is
    /// not a persistent identifier.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for McastCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "McastCacheKey{{mcast_ip={}, sink={}}}",
            self.mcast_ip, self.sink
        )
    }
}

/// Wire shape before validation. Missing and `null` fields both land as `None`.
#[derive(Deserialize)]
struct RawMcastCacheKey {
    #[serde(default)]
    mcast_ip: Option<IpAddr>,
    #[serde(default)]
    sink: Option<ConnectPoint>,
}

impl TryFrom<RawMcastCacheKey> for McastCacheKey {
    type Error = McastError;

    fn try_from(raw: RawMcastCacheKey) -> Result<Self, Self::Error> {
        Self::from_parts(raw.mcast_ip, raw.sink)
    }
}
