//! Repository modules implementing persistence for Taskboard entities.
//!
//! Each module adds methods to `TaskDb` via `impl` blocks.

pub mod task;
