//! Device and port identifiers that make up a connect point.
//!
//! `DeviceId` is an opaque URI-like string (`of:0000000000000001`,
//! `netconf:10.0.0.1:830`, ...). It is only checked for the properties that
//! keep it usable as a map key and as the device half of `device/port`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{InvalidArgument, McastError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceId(String);

impl DeviceId {
    /// Rejects empty values and values containing whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, McastError> {
        let value = value.into();
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(InvalidArgument::InvalidDeviceId(value).into());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URI scheme, e.g. `of` for `of:0000000000000001`.
    pub fn scheme(&self) -> Option<&str> {
        self.0
            .split_once(':')
            .map(|(scheme, _)| scheme)
            .filter(|scheme| !scheme.is_empty())
    }
}

impl TryFrom<String> for DeviceId {
    type Error = McastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceId> for String {
    fn from(id: DeviceId) -> Self {
        id.0
    }
}

impl FromStr for DeviceId {
    type Err = McastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortNumber(u64);

impl PortNumber {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PortNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for PortNumber {
    type Err = McastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| InvalidArgument::InvalidPort(s.to_string()).into())
    }
}

impl fmt::Display for PortNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn device_id_keeps_value_verbatim() {
        let id = DeviceId::new("of:0000000000000001").unwrap();
        assert_eq!(id.as_str(), "of:0000000000000001");
        assert_eq!(id.to_string(), "of:0000000000000001");
        assert_eq!(id.scheme(), Some("of"));
    }

    #[rstest]
    #[case::empty("")]
    #[case::space("of:0000 0001")]
    #[case::tab("of:\t1")]
    fn device_id_rejects(#[case] raw: &str) {
        let err = DeviceId::new(raw).unwrap_err();
        assert_eq!(err.reason(), &InvalidArgument::InvalidDeviceId(raw.to_string()));
    }

    #[rstest]
    #[case::no_colon("device1", None)]
    #[case::leading_colon(":abc", None)]
    #[case::netconf("netconf:10.0.0.1:830", Some("netconf"))]
    fn device_id_scheme(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(DeviceId::new(raw).unwrap().scheme(), expected);
    }

    #[test]
    fn device_id_deserialization_validates() {
        let id: DeviceId = serde_json::from_str("\"of:1\"").unwrap();
        assert_eq!(id.as_str(), "of:1");
        assert!(serde_json::from_str::<DeviceId>("\"\"").is_err());
    }

    #[rstest]
    #[case::zero("0", 0)]
    #[case::three("3", 3)]
    #[case::max("18446744073709551615", u64::MAX)]
    fn port_number_parses(#[case] raw: &str, #[case] expected: u64) {
        let port: PortNumber = raw.parse().unwrap();
        assert_eq!(port.as_u64(), expected);
        assert_eq!(port.to_string(), raw);
    }

    #[rstest]
    #[case::empty("")]
    #[case::negative("-1")]
    #[case::name("eth0")]
    #[case::overflow("18446744073709551616")]
    fn port_number_rejects(#[case] raw: &str) {
        let err = raw.parse::<PortNumber>().unwrap_err();
        assert_eq!(err.reason(), &InvalidArgument::InvalidPort(raw.to_string()));
    }

    #[test]
    fn port_number_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&PortNumber::new(3)).unwrap(), "3");
    }
}
