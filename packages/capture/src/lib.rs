//! Style capture pipeline.
//!
//! [`capture`] snapshots the resolved styles of a subtree, diffs them against
//! tag baselines and parent inheritance, and produces three equivalent
//! renditions: cleaned markup with generated class names, a stylesheet for
//! those classes, and the same markup carrying utility classes instead.

mod capture;
mod options;

pub use capture::{capture, CaptureOutput};
pub use options::{CaptureOptions, DEFAULT_CONFIG_NAME};

pub use stylecopy_extractor::{ComputedStyles, StyleResolver};
pub use stylecopy_parser::{parse, Document, NodeId};
