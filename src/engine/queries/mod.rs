//! Size and disk space queries

pub mod disk;
pub mod size;

pub use disk::{query_disk_space, DiskSpace};
pub use size::{measure_all, measure_size, parse_size, ByteCount};
