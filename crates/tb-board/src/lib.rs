//! # tb-board
//!
//! Board Reconciliation Client for Taskboard.
//!
//! - [`state`]: the `BoardState` container, its three columns, and the pure
//!   optimistic apply / revert functions
//! - [`api`]: the `TaskApi` seam and `LocalApi`, an in-process adapter over
//!   `TaskService`
//! - [`client`]: `BoardClient`, which runs load, drag-and-drop, create, and
//!   delete against a `TaskApi`
//! - [`form`]: client-side handling of the "new task" form

pub mod api;
pub mod client;
pub mod error;
pub mod form;
pub mod state;

pub use api::{LocalApi, TaskApi};
pub use client::{BoardClient, DropOutcome};
pub use error::ApiError;
pub use form::CreateForm;
pub use state::{BoardState, Column, MoveOutcome, Notice, Snapshot};
