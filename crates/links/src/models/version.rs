use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use exn::ResultExt;

use crate::consts::VERSION_REGEX;
use crate::error::{Error, ErrorKind};

/// A CUDA Toolkit version key.
///
/// Either a concrete release (`11.8.0`) or a minor-line alias (`11.8`) standing
/// for the newest patch release of that line. The two are distinct keys: an
/// alias never compares equal to a concrete release, and sorts before every
/// release of its own line.
///
/// Parsing and formatting are exact inverses, so a key formatted for a lookup
/// is always the same key the tables were built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CudaVersion {
    major: u32,
    minor: u32,
    patch: Option<u32>,
}
impl CudaVersion {
    /// A concrete release, e.g. `11.8.0`.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch: Some(patch) }
    }

    /// The alias for the newest release of a minor line, e.g. `11.8`.
    pub const fn minor_line(major: u32, minor: u32) -> Self {
        Self { major, minor, patch: None }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// The patch component, `None` for minor-line aliases.
    pub fn patch(&self) -> Option<u32> {
        self.patch
    }

    /// Returns `true` for two-component keys such as `11.8`.
    pub fn is_alias(&self) -> bool {
        self.patch.is_none()
    }

    /// Returns the minor-line alias this version belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuda_links::models::CudaVersion;
    /// let version: CudaVersion = "11.7.1".parse().unwrap();
    /// assert_eq!(version.alias().to_string(), "11.7");
    /// ```
    pub fn alias(&self) -> Self {
        Self::minor_line(self.major, self.minor)
    }
}
impl FromStr for CudaVersion {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || ErrorKind::ParseError {
            field: "version",
            value: s.to_string(),
        };
        let Some(captures) = VERSION_REGEX.captures(s) else {
            exn::bail!(parse_error());
        };
        // Components are all-digit by now, only overflow can fail.
        let major = captures[1].parse::<u32>().or_raise(parse_error)?;
        let minor = captures[2].parse::<u32>().or_raise(parse_error)?;
        let patch = match captures.get(3) {
            Some(m) => Some(m.as_str().parse::<u32>().or_raise(parse_error)?),
            None => None,
        };
        Ok(Self { major, minor, patch })
    }
}
impl TryFrom<&str> for CudaVersion {
    type Error = Error;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl TryFrom<String> for CudaVersion {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl Display for CudaVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CudaVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CudaVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(|e: Error| serde::de::Error::custom(&*e))
    }
}
