//! # tb-core
//!
//! Core types, validation, and error types for Taskboard.
//!
//! This crate provides the foundational types shared across all Taskboard crates:
//! - The `Task` entity and its derived display properties
//! - The closed `TaskStatus` set
//! - The verified `Identity` attached to every request
//! - Request payloads (`NewTask`, `TaskPatch`, `TaskFilter`) and their validation
//! - The error taxonomy surfaced at the service boundary
//! - The `TaskStore` persistence trait

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod requests;
pub mod store;
pub mod validate;
