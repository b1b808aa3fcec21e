//! Known CUDA Toolkit releases for Windows.
//!
//! Download URLs don't follow a consistent pattern, so they are listed verbatim
//! from the CUDA Toolkit archive: <https://developer.nvidia.com/cuda-toolkit-archive>
//!
//! Only concrete releases belong here. Minor-line aliases (`11.8`) are derived
//! when a [`Directory`](crate::Directory) is built.

use crate::models::{CudaVersion, Release};

const fn release(version: (u32, u32, u32), network: Option<&'static str>, local: Option<&'static str>) -> Release {
    Release::new(CudaVersion::new(version.0, version.1, version.2), network, local)
}

pub(crate) static RELEASES: &[Release] = &[
    release(
        (11, 8, 0),
        Some("https://developer.download.nvidia.com/compute/cuda/11.8.0/network_installers/cuda_11.8.0_windows_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.8.0/local_installers/cuda_11.8.0_522.06_windows.exe"),
    ),
    release(
        (11, 7, 1),
        Some("https://developer.download.nvidia.com/compute/cuda/11.7.1/network_installers/cuda_11.7.1_windows_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.7.1/local_installers/cuda_11.7.1_516.94_windows.exe"),
    ),
    release(
        (11, 7, 0),
        Some("https://developer.download.nvidia.com/compute/cuda/11.7.0/network_installers/cuda_11.7.0_windows_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.7.0/local_installers/cuda_11.7.0_516.01_windows.exe"),
    ),
    release(
        (11, 6, 2),
        Some("https://developer.download.nvidia.com/compute/cuda/11.6.2/network_installers/cuda_11.6.2_windows_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.6.2/local_installers/cuda_11.6.2_511.65_windows.exe"),
    ),
    release(
        (11, 6, 1),
        Some("https://developer.download.nvidia.com/compute/cuda/11.6.1/network_installers/cuda_11.6.1_windows_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.6.1/local_installers/cuda_11.6.1_511.65_windows.exe"),
    ),
    release(
        (11, 6, 0),
        Some("https://developer.download.nvidia.com/compute/cuda/11.6.0/network_installers/cuda_11.6.0_windows_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.6.0/local_installers/cuda_11.6.0_511.23_windows.exe"),
    ),
    release(
        (11, 5, 2),
        Some("https://developer.download.nvidia.com/compute/cuda/11.5.2/network_installers/cuda_11.5.2_windows_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.5.2/local_installers/cuda_11.5.2_496.13_windows.exe"),
    ),
    release(
        (11, 5, 1),
        Some("https://developer.download.nvidia.com/compute/cuda/11.5.1/network_installers/cuda_11.5.1_windows_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.5.1/local_installers/cuda_11.5.1_496.13_windows.exe"),
    ),
    release(
        (11, 5, 0),
        None,
        Some("https://developer.download.nvidia.com/compute/cuda/11.5.0/local_installers/cuda_11.5.0_496.13_win10.exe"),
    ),
    release(
        (11, 4, 3),
        Some("https://developer.download.nvidia.com/compute/cuda/11.4.3/network_installers/cuda_11.4.3_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.4.3/local_installers/cuda_11.4.3_472.50_win10.exe"),
    ),
    release(
        (11, 4, 2),
        Some("https://developer.download.nvidia.com/compute/cuda/11.4.2/network_installers/cuda_11.4.2_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.4.2/local_installers/cuda_11.4.2_471.41_win10.exe"),
    ),
    release(
        (11, 4, 1),
        Some("https://developer.download.nvidia.com/compute/cuda/11.4.1/network_installers/cuda_11.4.1_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.4.1/local_installers/cuda_11.4.1_471.41_win10.exe"),
    ),
    release(
        (11, 4, 0),
        Some("https://developer.download.nvidia.com/compute/cuda/11.4.0/network_installers/cuda_11.4.0_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.4.0/local_installers/cuda_11.4.0_471.11_win10.exe"),
    ),
    release(
        (11, 3, 1),
        Some("https://developer.download.nvidia.com/compute/cuda/11.3.1/network_installers/cuda_11.3.1_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.3.1/local_installers/cuda_11.3.1_465.89_win10.exe"),
    ),
    release(
        (11, 3, 0),
        Some("https://developer.download.nvidia.com/compute/cuda/11.3.0/network_installers/cuda_11.3.0_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.3.0/local_installers/cuda_11.3.0_465.89_win10.exe"),
    ),
    release(
        (11, 2, 2),
        Some("https://developer.download.nvidia.com/compute/cuda/11.2.2/network_installers/cuda_11.2.2_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.2.2/local_installers/cuda_11.2.2_461.33_win10.exe"),
    ),
    release(
        (11, 2, 1),
        Some("https://developer.download.nvidia.com/compute/cuda/11.2.1/network_installers/cuda_11.2.1_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.2.1/local_installers/cuda_11.2.1_461.09_win10.exe"),
    ),
    release(
        (11, 2, 0),
        Some("https://developer.download.nvidia.com/compute/cuda/11.2.0/network_installers/cuda_11.2.0_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.2.0/local_installers/cuda_11.2.0_460.89_win10.exe"),
    ),
    release(
        (11, 1, 1),
        Some("https://developer.download.nvidia.com/compute/cuda/11.1.1/network_installers/cuda_11.1.1_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.1.1/local_installers/cuda_11.1.1_456.81_win10.exe"),
    ),
    release(
        (11, 1, 0),
        Some("https://developer.download.nvidia.com/compute/cuda/11.1.0/network_installers/cuda_11.1.0_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.1.0/local_installers/cuda_11.1.0_456.43_win10.exe"),
    ),
    release(
        (11, 0, 3),
        Some("https://developer.download.nvidia.com/compute/cuda/11.0.3/network_installers/cuda_11.0.3_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.0.3/local_installers/cuda_11.0.3_451.82_win10.exe"),
    ),
    release(
        (11, 0, 2),
        Some("https://developer.download.nvidia.com/compute/cuda/11.0.2/network_installers/cuda_11.0.2_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.0.2/local_installers/cuda_11.0.2_451.48_win10.exe"),
    ),
    release(
        (11, 0, 1),
        Some("https://developer.download.nvidia.com/compute/cuda/11.0.1/network_installers/cuda_11.0.1_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.0.1/local_installers/cuda_11.0.1_451.22_win10.exe"),
    ),
    // NVIDIA's archive serves the 11.0.2 full installer for 11.0.0.
    release(
        (11, 0, 0),
        Some("https://developer.download.nvidia.com/compute/cuda/11.0.0/network_installers/cuda_11.0.0_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/11.0.2/local_installers/cuda_11.0.2_451.48_win10.exe"),
    ),
    release(
        (10, 2, 89),
        Some("https://developer.download.nvidia.com/compute/cuda/10.2/Prod/network_installers/cuda_10.2.89_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/10.2/Prod/local_installers/cuda_10.2.89_441.22_win10.exe"),
    ),
    release(
        (10, 1, 243),
        Some("https://developer.download.nvidia.com/compute/cuda/10.1/Prod/network_installers/cuda_10.1.243_win10_network.exe"),
        Some("https://developer.download.nvidia.com/compute/cuda/10.1/Prod/local_installers/cuda_10.1.243_426.00_win10.exe"),
    ),
    release(
        (10, 0, 130),
        Some("https://developer.nvidia.com/compute/cuda/10.0/Prod/network_installers/cuda_10.0.130_win10_network"),
        Some("https://developer.nvidia.com/compute/cuda/10.0/Prod/local_installers/cuda_10.0.130_411.31_win10"),
    ),
    release(
        (9, 2, 148),
        Some("https://developer.nvidia.com/compute/cuda/9.2/Prod2/network_installers2/cuda_9.2.148_win10_network"),
        Some("https://developer.nvidia.com/compute/cuda/9.2/Prod2/local_installers2/cuda_9.2.148_win10"),
    ),
    release(
        (8, 0, 61),
        Some("https://developer.nvidia.com/compute/cuda/8.0/Prod2/network_installers/cuda_8.0.61_win10_network-exe"),
        Some("https://developer.nvidia.com/compute/cuda/8.0/Prod2/local_installers/cuda_8.0.61_win10-exe"),
    ),
];
