//! Recursive exploration of nested archives.
//!
//! [`Explorer`] extracts one archive into its exploded tree, matches every
//! produced path against the dependency identifier, reads matching
//! descriptors, and descends into every extracted entry that is itself an
//! archive. [`remove_exploded_tree`] implements the pre-scan cleanup applied
//! to the root archive.

pub mod cleanup;
pub mod engine;

pub use cleanup::remove_exploded_tree;
pub use engine::Explorer;
