//! Resource discovery implementations

mod fs_scanner;
mod walker;

pub use fs_scanner::FsScanner;
pub(crate) use walker::translation_walker;
