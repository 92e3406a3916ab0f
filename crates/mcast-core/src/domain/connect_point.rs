//! ConnectPoint - a single (device, port) attachment point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{InvalidArgument, McastError};
use super::ids::{DeviceId, PortNumber};

/// Where a receiver for a multicast group is attached.
///
/// Rendered and parsed as `device/port`. Device ids may themselves contain
/// `/`, so parsing splits on the last one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectPoint {
    device_id: DeviceId,
    port: PortNumber,
}

impl ConnectPoint {
    pub fn new(device_id: DeviceId, port: PortNumber) -> Self {
        Self { device_id, port }
    }

    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    pub fn port(&self) -> PortNumber {
        self.port
    }
}

impl FromStr for ConnectPoint {
    type Err = McastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || McastError::from(InvalidArgument::MalformedSink(s.to_string()));

        let (device, port) = s.rsplit_once('/').ok_or_else(malformed)?;
        let device_id = DeviceId::new(device).map_err(|_| malformed())?;
        let port = port.parse::<PortNumber>().map_err(|_| malformed())?;
        Ok(Self::new(device_id, port))
    }
}

impl fmt::Display for ConnectPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.device_id, self.port)
    }
}
