//! Size measurement

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::Path;

use bytesize::ByteSize;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// A non-negative number of bytes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ByteCount(pub u64);

impl ByteCount {
    pub const ZERO: ByteCount = ByteCount(0);

    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Bytes released going from `self` to `after`. A target that grew frees nothing.
    pub fn freed_to(self, after: ByteCount) -> ByteCount {
        ByteCount(self.0.saturating_sub(after.0))
    }
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ByteSize(self.0))
    }
}

impl Add for ByteCount {
    type Output = ByteCount;

    fn add(self, rhs: ByteCount) -> ByteCount {
        ByteCount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for ByteCount {
    fn add_assign(&mut self, rhs: ByteCount) {
        *self = *self + rhs;
    }
}

impl Sum for ByteCount {
    fn sum<I: Iterator<Item = ByteCount>>(iter: I) -> ByteCount {
        iter.fold(ByteCount::ZERO, Add::add)
    }
}

/// Recursive size of a file or directory.
///
/// Missing paths and unreadable entries count as zero, so this never fails.
pub fn measure_size(path: &Path) -> ByteCount {
    let bytes: u64 = WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum();

    tracing::debug!("measured {} at {}", ByteSize(bytes), path.display());
    ByteCount(bytes)
}

/// Combined size of several paths.
pub fn measure_all<P: AsRef<Path>>(paths: &[P]) -> ByteCount {
    paths.iter().map(|p| measure_size(p.as_ref())).sum()
}

/// Parse a size the way package managers print it ("1.2GB", "512kB", "0B").
pub fn parse_size(text: &str) -> Option<ByteCount> {
    text.trim().parse::<ByteSize>().ok().map(|size| ByteCount(size.as_u64()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_path_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(measure_size(&temp_dir.path().join("nope")), ByteCount::ZERO);
    }

    #[test]
    fn test_recursive_size() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("a/one.bin"), vec![0u8; 100]).unwrap();
        fs::write(nested.join("two.bin"), vec![0u8; 250]).unwrap();

        assert_eq!(measure_size(temp_dir.path()), ByteCount(350));
        assert_eq!(measure_size(&nested.join("two.bin")), ByteCount(250));
    }

    #[test]
    fn test_measure_all() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.bin");
        let b = temp_dir.path().join("b.bin");
        fs::write(&a, vec![1u8; 10]).unwrap();
        fs::write(&b, vec![1u8; 32]).unwrap();

        assert_eq!(measure_all(&[a, b, temp_dir.path().join("missing")]), ByteCount(42));
    }

    #[test]
    fn test_freed_is_clamped() {
        assert_eq!(
            ByteCount(5_000_000_000).freed_to(ByteCount::ZERO),
            ByteCount(5_000_000_000)
        );
        assert_eq!(ByteCount(100).freed_to(ByteCount(150)), ByteCount::ZERO);
        assert_eq!(ByteCount(100).freed_to(ByteCount(100)), ByteCount::ZERO);
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("0B"), Some(ByteCount(0)));
        assert_eq!(parse_size("512"), Some(ByteCount(512)));
        assert_eq!(parse_size("2 KiB"), Some(ByteCount(2048)));
        assert_eq!(parse_size("1.5GB"), Some(ByteCount(1_500_000_000)));
        assert_eq!(parse_size("n/a"), None);
    }
}
