//! Disk space snapshot

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sysinfo::Disks;

use crate::engine::queries::ByteCount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskSpace {
    pub mount_point: PathBuf,
    pub total: ByteCount,
    pub used: ByteCount,
    pub available: ByteCount,
    pub usage_percent: f64,
}

impl DiskSpace {
    pub fn new(mount_point: PathBuf, total: u64, available: u64) -> Self {
        let used = total.saturating_sub(available);
        let usage_percent = if total > 0 {
            (used as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        Self {
            mount_point,
            total: ByteCount(total),
            used: ByteCount(used),
            available: ByteCount(available),
            usage_percent,
        }
    }
}

/// Space on the volume holding `path`, if any mounted disk contains it.
pub fn query_disk_space(path: &Path) -> Option<DiskSpace> {
    let disks = Disks::new_with_refreshed_list();

    let entries: Vec<DiskSpace> = disks
        .iter()
        .map(|disk| {
            DiskSpace::new(
                disk.mount_point().to_path_buf(),
                disk.total_space(),
                disk.available_space(),
            )
        })
        .collect();

    select_volume(entries, path)
}

/// The disk whose mount point is the longest prefix of `path`.
fn select_volume(entries: Vec<DiskSpace>, path: &Path) -> Option<DiskSpace> {
    entries
        .into_iter()
        .filter(|disk| path.starts_with(&disk.mount_point))
        .max_by_key(|disk| disk.mount_point.components().count())
}
