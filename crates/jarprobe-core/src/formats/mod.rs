//! Archive format implementations.

pub mod jar;
pub mod traits;

pub use jar::JarArchive;
pub use traits::ArchiveFormat;
pub use traits::Entry;
