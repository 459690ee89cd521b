pub mod entry;
pub mod listing;
pub mod ops;

pub use entry::{EntryKind, FileEntry};
pub use listing::{DirectoryListing, DirectoryProvider, LocalFileSystem};
