//! Reading input text and saving/loading compressed archives.
//!
//! Archives are single JSON documents holding everything needed to decode:
//! the policy, the code table, the bits and the symbol count.

pub mod format;
pub mod input;
pub mod load;
pub mod save;

pub use format::{SerializedArchive, SerializedCode, SerializedFrequency};
pub use input::{first_line, load_first_line, load_text};
pub use load::ArchiveLoader;
pub use save::ArchiveSaver;
