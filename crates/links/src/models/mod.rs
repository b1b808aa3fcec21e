mod installer;
mod release;
mod version;

pub use self::installer::InstallerKind;
pub use self::release::Release;
pub use self::version::CudaVersion;

fn sanitize(s: impl AsRef<str>) -> String {
    s.as_ref().trim().to_lowercase().replace('-', "").replace('_', "").replace(' ', "")
}
