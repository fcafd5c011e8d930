pub mod backend;
pub mod format;
pub mod nav;
pub mod storage;
