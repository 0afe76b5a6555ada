pub mod client;
pub mod file;

pub use client::SnapshotSource;
#[cfg(test)]
pub use client::MockSnapshotSource;
pub use file::JsonFileSource;
