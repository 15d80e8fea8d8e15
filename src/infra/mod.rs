//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem and external processes.
//! This module is the only place where side effects occur.

pub mod artifacts;
pub mod checksum;
pub mod filesystem;
pub mod kernel_dirs;
pub mod xz;
