//! This crate manages a personal schedule, the kind a desk widget displays next to a live clock.
//!
//! The heart of it is the [`TaskStore`]: an always-sorted collection of [`Task`] records
//! that is mirrored in full to a persistent storage slot (as a JSON array) after every mutation.
//!
//! The slot itself is abstracted by the [`traits::Storage`] trait, so the store can be backed by
//! a real file ([`FileStorage`]) or by an in-memory stub ([`MemoryStorage`]) in tests and demos.
//!
//! The [`clock`] module provides the live clock: a periodic observer of the wall-clock time.
//! It is independent from the task store and never interacts with it.

pub mod traits;

mod task;
pub use task::Task;
pub use task::TaskId;
pub mod store;
pub use store::TaskStore;
pub mod storage;
pub use storage::FileStorage;
pub use storage::MemoryStorage;
pub mod clock;
pub use clock::Clock;

pub mod config;
pub mod utils;
