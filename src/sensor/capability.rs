use std::str::FromStr;

use anyhow::{Error, bail};

/// Sensor package carried by a device. Exactly one device in the fleet has
/// the full climate and particulate package; the rest report CO2 only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Basic,
    Full,
}

impl Capability {
    /// The device reporting id 1 carries the full package. The mapping is
    /// keyed on the self-reported id, not the network address, because the
    /// two can diverge.
    pub fn from_reported_id(id: i64) -> Self {
        if id == 1 {
            Capability::Full
        } else {
            Capability::Basic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Basic => "basic",
            Capability::Full => "full",
        }
    }
}

impl FromStr for Capability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Capability::Basic),
            "full" => Ok(Capability::Full),
            _ => bail!("unknown sensor role: {}", s),
        }
    }
}
