use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use super::sanitize;
use crate::error::{Error, ErrorKind};

/// Which flavour of Windows installer to link to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InstallerKind {
    /// Small installer that downloads the selected components at install time.
    #[default]
    Network,
    /// Full installer bundling every component.
    Local,
}
impl InstallerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallerKind::Network => "network",
            InstallerKind::Local => "local",
        }
    }
}
impl FromStr for InstallerKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "network" | "net" | "web" => Self::Network,
            "local" | "full" | "offline" => Self::Local,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "installer",
                value: s.to_string(),
            }),
        })
    }
}
impl TryFrom<String> for InstallerKind {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl Display for InstallerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for InstallerKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for InstallerKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(|e: Error| serde::de::Error::custom(&*e))
    }
}
