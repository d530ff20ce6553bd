//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;
mod memory;

pub use home::{libris_home_dir, user_config_path, LIBRIS_TEST_HOME_VAR};
pub use local::{atomic_write, LocalFs};
pub use memory::MemoryFs;
