use super::{CudaVersion, InstallerKind};

/// A single CUDA Toolkit release and its Windows installer downloads.
///
/// Either installer may be missing: NVIDIA did not publish both flavours for
/// every release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub version: CudaVersion,
    pub network: Option<&'static str>,
    pub local: Option<&'static str>,
}
impl Release {
    pub const fn new(version: CudaVersion, network: Option<&'static str>, local: Option<&'static str>) -> Self {
        Self { version, network, local }
    }

    /// The download URL for the given installer flavour, if published.
    pub fn url(&self, installer: InstallerKind) -> Option<&'static str> {
        match installer {
            InstallerKind::Network => self.network,
            InstallerKind::Local => self.local,
        }
    }
}
