//! Version to download URL lookup.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use exn::ResultExt;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ErrorKind, Result};
use crate::models::{CudaVersion, InstallerKind, Release};
use crate::releases::RELEASES;

type Table = BTreeMap<CudaVersion, &'static str>;

static GLOBAL: LazyLock<Directory> = LazyLock::new(Directory::new);

/// Anything that can hand out installer links, typically a [`Directory`].
///
/// Installers should depend on this rather than on [`Directory::global`] so
/// that they can be handed a smaller directory in tests.
pub trait InstallerLinks {
    /// Every version key with a known installer of the given flavour, sorted.
    fn available_versions(&self, installer: InstallerKind) -> Vec<CudaVersion>;
    /// The download URL for exactly this version key.
    fn url(&self, installer: InstallerKind, version: &CudaVersion) -> Result<Url>;
}

/// Immutable mapping of CUDA versions to Windows installer download URLs, one
/// table per [`InstallerKind`].
///
/// Besides every concrete release, each table holds a minor-line alias
/// (`11.8`) pointing at the newest release of that line which has an installer
/// in that table. Lookups are exact: `11.8` and `11.8.0` are different keys,
/// and nothing falls back to a nearby version.
///
/// Every minor line gets an alias, including pre-11 lines such as `10.2`, and
/// `11.0` resolves to 11.0.3 rather than 11.0.2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    network: Table,
    local: Table,
}
impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
impl Directory {
    /// A directory of every known release.
    pub fn new() -> Self {
        Self::from_releases(RELEASES)
    }

    /// The process-wide directory of every known release, built on first use.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuda_links::Directory;
    /// assert!(std::ptr::eq(Directory::global(), Directory::global()));
    /// ```
    pub fn global() -> &'static Directory {
        &GLOBAL
    }

    /// Builds a directory from an explicit list of releases.
    ///
    /// A version listed twice keeps only its last record, installers it lacks
    /// included. Aliases listed explicitly are kept as-is, any other minor line
    /// gets one generated.
    pub fn from_releases<'a>(releases: impl IntoIterator<Item = &'a Release>) -> Self {
        let releases: BTreeMap<CudaVersion, &Release> = releases.into_iter().map(|r| (r.version, r)).collect();
        let mut network = Table::new();
        let mut local = Table::new();
        for release in releases.into_values() {
            if let Some(url) = release.network {
                network.insert(release.version, url);
            }
            if let Some(url) = release.local {
                local.insert(release.version, url);
            }
        }
        add_aliases(&mut network);
        add_aliases(&mut local);
        debug!(network = network.len(), local = local.len(), "built CUDA installer directory");
        Self { network, local }
    }

    fn table(&self, installer: InstallerKind) -> &Table {
        match installer {
            InstallerKind::Network => &self.network,
            InstallerKind::Local => &self.local,
        }
    }

    /// Every version key with a known installer of the given flavour, sorted
    /// ascending.
    pub fn available_versions(&self, installer: InstallerKind) -> Vec<CudaVersion> {
        self.table(installer).keys().copied().collect()
    }

    pub fn available_network_versions(&self) -> Vec<CudaVersion> {
        self.available_versions(InstallerKind::Network)
    }

    pub fn available_local_versions(&self) -> Vec<CudaVersion> {
        self.available_versions(InstallerKind::Local)
    }

    /// Looks up the download URL for exactly this version key.
    ///
    /// Fails with [`UnknownVersion`](ErrorKind::UnknownVersion) when the table
    /// has no such key.
    #[instrument(level = "debug", skip(self, version), fields(cuda_version = %version))]
    pub fn url(&self, installer: InstallerKind, version: &CudaVersion) -> Result<Url> {
        let Some(url) = self.table(installer).get(version) else {
            exn::bail!(ErrorKind::UnknownVersion {
                version: *version,
                installer,
            });
        };
        Url::parse(url).or_raise(|| ErrorKind::InvalidUrl(url.to_string()))
    }

    /// # Examples
    ///
    /// ```
    /// use cuda_links::Directory;
    /// let version = "8.0.61".parse().unwrap();
    /// let url = Directory::global().network_url(&version).unwrap();
    /// assert_eq!(url.host_str(), Some("developer.nvidia.com"));
    /// ```
    pub fn network_url(&self, version: &CudaVersion) -> Result<Url> {
        self.url(InstallerKind::Network, version)
    }

    pub fn local_url(&self, version: &CudaVersion) -> Result<Url> {
        self.url(InstallerKind::Local, version)
    }

    /// Parses `version` and looks it up, see [`Directory::url`].
    pub fn url_str(&self, installer: InstallerKind, version: &str) -> Result<Url> {
        self.url(installer, &version.parse()?)
    }

    pub fn network_url_str(&self, version: &str) -> Result<Url> {
        self.url_str(InstallerKind::Network, version)
    }
}
impl InstallerLinks for Directory {
    fn available_versions(&self, installer: InstallerKind) -> Vec<CudaVersion> {
        Directory::available_versions(self, installer)
    }

    fn url(&self, installer: InstallerKind, version: &CudaVersion) -> Result<Url> {
        Directory::url(self, installer, version)
    }
}

/// Points each minor-line alias at the newest release of its line, unless the
/// table already has an entry for that alias.
fn add_aliases(table: &mut Table) {
    let mut newest = Table::new();
    // Keys iterate in ascending order, so later releases overwrite earlier ones.
    for (version, url) in table.iter().filter(|(v, _)| !v.is_alias()) {
        newest.insert(version.alias(), *url);
    }
    for (alias, url) in newest {
        table.entry(alias).or_insert(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const MISSING: CudaVersion = CudaVersion::new(99, 9, 9);

    fn directory() -> &'static Directory {
        Directory::global()
    }

    #[test]
    fn every_release_resolves_to_its_recorded_url() {
        for release in RELEASES {
            for installer in [InstallerKind::Network, InstallerKind::Local] {
                let resolved = directory().url(installer, &release.version);
                match release.url(installer) {
                    Some(expected) => assert_eq!(resolved.unwrap().as_str(), expected),
                    None => assert_eq!(
                        *resolved.unwrap_err(),
                        ErrorKind::UnknownVersion {
                            version: release.version,
                            installer
                        }
                    ),
                }
            }
        }
    }

    #[rstest]
    #[case(InstallerKind::Network)]
    #[case(InstallerKind::Local)]
    fn unknown_version_fails(#[case] installer: InstallerKind) {
        let err = directory().url(installer, &MISSING).unwrap_err();
        assert_eq!(
            *err,
            ErrorKind::UnknownVersion {
                version: MISSING,
                installer
            }
        );
    }

    #[rstest]
    #[case(InstallerKind::Network)]
    #[case(InstallerKind::Local)]
    fn listed_versions_all_resolve(#[case] installer: InstallerKind) {
        let versions = directory().available_versions(installer);
        assert_eq!(versions.len(), directory().table(installer).len());
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
        for version in &versions {
            assert!(directory().url(installer, version).is_ok(), "{version} did not resolve");
        }
    }

    #[test]
    fn network_listing_counts() {
        // 28 releases with a network installer, 14 minor lines.
        assert_eq!(directory().available_network_versions().len(), 28 + 14);
        // 29 releases with a full installer, 14 minor lines.
        assert_eq!(directory().available_local_versions().len(), 29 + 14);
    }

    #[rstest]
    #[case(
        "11.8",
        "https://developer.download.nvidia.com/compute/cuda/11.8.0/network_installers/cuda_11.8.0_windows_network.exe"
    )]
    #[case(
        "8.0.61",
        "https://developer.nvidia.com/compute/cuda/8.0/Prod2/network_installers/cuda_8.0.61_win10_network-exe"
    )]
    #[case(
        "11.5",
        "https://developer.download.nvidia.com/compute/cuda/11.5.2/network_installers/cuda_11.5.2_windows_network.exe"
    )]
    #[case(
        "11.0",
        "https://developer.download.nvidia.com/compute/cuda/11.0.3/network_installers/cuda_11.0.3_win10_network.exe"
    )]
    #[case(
        "10.2",
        "https://developer.download.nvidia.com/compute/cuda/10.2/Prod/network_installers/cuda_10.2.89_win10_network.exe"
    )]
    fn network_scenarios(#[case] version: &str, #[case] expected: &str) {
        let parsed: CudaVersion = version.parse().unwrap();
        assert!(directory().available_network_versions().contains(&parsed));
        assert_eq!(directory().network_url(&parsed).unwrap().as_str(), expected);
        assert_eq!(directory().network_url_str(version).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case(
        InstallerKind::Network,
        "11.7",
        "https://developer.download.nvidia.com/compute/cuda/11.7.1/network_installers/cuda_11.7.1_windows_network.exe"
    )]
    #[case(
        InstallerKind::Network,
        "11.4",
        "https://developer.download.nvidia.com/compute/cuda/11.4.3/network_installers/cuda_11.4.3_win10_network.exe"
    )]
    #[case(
        InstallerKind::Local,
        "11.4",
        "https://developer.download.nvidia.com/compute/cuda/11.4.3/local_installers/cuda_11.4.3_472.50_win10.exe"
    )]
    #[case(
        InstallerKind::Local,
        "11.6",
        "https://developer.download.nvidia.com/compute/cuda/11.6.2/local_installers/cuda_11.6.2_511.65_windows.exe"
    )]
    #[case(
        InstallerKind::Local,
        "11.1",
        "https://developer.download.nvidia.com/compute/cuda/11.1.1/local_installers/cuda_11.1.1_456.81_win10.exe"
    )]
    fn alias_urls(#[case] installer: InstallerKind, #[case] version: &str, #[case] expected: &str) {
        assert_eq!(directory().url_str(installer, version).unwrap().as_str(), expected);
    }

    #[test]
    fn aliases_follow_newest_release() {
        for installer in [InstallerKind::Network, InstallerKind::Local] {
            let table = directory().table(installer);
            for (alias, url) in table.iter().filter(|(v, _)| v.is_alias()) {
                let newest = table
                    .keys()
                    .filter(|v| !v.is_alias() && v.alias() == *alias)
                    .max()
                    .unwrap();
                assert_eq!(table[newest], *url, "{installer} alias {alias}");
            }
        }
    }

    #[test]
    fn alias_and_zero_patch_are_distinct_keys() {
        // 11.5.0 only ever shipped a full installer.
        assert!(directory().network_url_str("11.5").is_ok());
        assert!(directory().network_url_str("11.5.0").is_err());
        assert!(directory().local_url(&CudaVersion::new(11, 5, 0)).is_ok());
    }

    #[test]
    fn url_str_reports_parse_errors() {
        let err = directory().url_str(InstallerKind::Local, "11.x").unwrap_err();
        assert_eq!(
            *err,
            ErrorKind::ParseError {
                field: "version",
                value: "11.x".to_string()
            }
        );
    }

    #[test]
    fn global_is_a_single_instance() {
        assert!(std::ptr::eq(Directory::global(), Directory::global()));
        assert_eq!(Directory::global(), &Directory::default());
    }

    #[test]
    fn explicit_alias_and_duplicates() {
        let releases = [
            Release::new(CudaVersion::new(1, 0, 0), Some("https://example.com/old"), None),
            Release::new(CudaVersion::new(1, 0, 0), Some("https://example.com/1.0.0"), None),
            Release::new(CudaVersion::new(1, 0, 1), Some("https://example.com/1.0.1"), None),
            Release::new(CudaVersion::minor_line(1, 0), Some("https://example.com/pinned"), None),
            Release::new(CudaVersion::new(2, 1, 0), None, Some("not a url")),
        ];
        let directory = Directory::from_releases(&releases);
        assert_eq!(
            directory.available_network_versions(),
            [CudaVersion::minor_line(1, 0), CudaVersion::new(1, 0, 0), CudaVersion::new(1, 0, 1)]
        );
        assert_eq!(
            directory.network_url(&CudaVersion::new(1, 0, 0)).unwrap().as_str(),
            "https://example.com/1.0.0"
        );
        assert_eq!(
            directory.network_url(&CudaVersion::minor_line(1, 0)).unwrap().as_str(),
            "https://example.com/pinned"
        );
        let err = directory.local_url(&CudaVersion::minor_line(2, 1)).unwrap_err();
        assert_eq!(*err, ErrorKind::InvalidUrl("not a url".to_string()));
    }

    #[test]
    fn duplicate_release_replaces_whole_record() {
        let releases = [
            Release::new(
                CudaVersion::new(1, 0, 0),
                Some("https://example.com/net"),
                Some("https://example.com/old"),
            ),
            Release::new(CudaVersion::new(1, 0, 0), None, Some("https://example.com/local")),
        ];
        let directory = Directory::from_releases(&releases);
        assert!(directory.available_network_versions().is_empty());
        let err = directory.network_url(&CudaVersion::new(1, 0, 0)).unwrap_err();
        assert_eq!(
            *err,
            ErrorKind::UnknownVersion {
                version: CudaVersion::new(1, 0, 0),
                installer: InstallerKind::Network
            }
        );
        assert_eq!(
            directory.local_url(&CudaVersion::minor_line(1, 0)).unwrap().as_str(),
            "https://example.com/local"
        );
    }

    #[test]
    fn usable_through_trait_object() {
        let links: &dyn InstallerLinks = Directory::global();
        let versions = links.available_versions(InstallerKind::Network);
        assert!(versions.contains(&CudaVersion::minor_line(11, 8)));
        assert!(links.url(InstallerKind::Network, &MISSING).is_err());
    }
}
