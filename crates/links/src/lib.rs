//! Download links for the NVIDIA CUDA Toolkit Windows installers.
//!
//! NVIDIA's archive URLs follow no consistent pattern, so every known release
//! is recorded by hand and served from a [`Directory`]:
//!
//! - **Network installers** ([`InstallerKind::Network`]), which download the
//!   selected components at install time, and
//! - **Local installers** ([`InstallerKind::Local`]), which bundle everything.
//!
//! Each directory also answers for minor-line aliases such as `11.8`, which
//! resolve to the newest release of that line.
//!
//! ```
//! use cuda_links::{Directory, models::CudaVersion};
//!
//! let directory = Directory::global();
//! let version: CudaVersion = "11.8".parse().unwrap();
//! assert!(directory.available_network_versions().contains(&version));
//! assert_eq!(
//!     directory.network_url(&version).unwrap().as_str(),
//!     "https://developer.download.nvidia.com/compute/cuda/11.8.0/network_installers/cuda_11.8.0_windows_network.exe",
//! );
//! assert!(directory.network_url_str("99.9.9").is_err());
//! ```
//!
//! Downloading and running the installer is left to the caller.

mod consts;
mod directory;
pub mod error;
pub mod models;
mod releases;

pub use crate::directory::{Directory, InstallerLinks};
pub use crate::models::{CudaVersion, InstallerKind};
pub use url::Url;
