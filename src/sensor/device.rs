use std::str::FromStr;

use anyhow::{Error, bail};

use crate::sensor::Capability;

/// One entry of the polling list: a network address, optionally annotated
/// with the role the operator expects that address to report.
#[derive(Debug, Clone)]
pub struct Device {
    pub address: String,

    pub expected: Option<Capability>,
}

impl FromStr for Device {
    type Err = Error;

    /// Accepts `ADDR` or `ADDR=ROLE`, e.g. `192.168.0.7=full`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, role) = match s.split_once('=') {
            Some((address, role)) => (address, Some(role)),
            None => (s, None),
        };

        if address.is_empty() {
            bail!("empty device address: {:?}", s);
        }

        Ok(Device {
            address: address.to_string(),
            expected: role.map(Capability::from_str).transpose()?,
        })
    }
}
