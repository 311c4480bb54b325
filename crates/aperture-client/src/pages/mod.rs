mod disk_analysis;
mod ring_analysis;

pub use disk_analysis::DiskAnalysis;
pub use ring_analysis::RingAnalysis;
