use std::error::Error;

/// A single named slot in some persistent key-value storage medium.
///
/// The task store reads its slot once at startup and overwrites it in full after every mutation.
/// Keeping this behind a trait makes the store testable without a real storage backend
/// (see [`crate::storage::MemoryStorage`]).
pub trait Storage {
    /// Returns the raw content of the slot, or `None` in case nothing has ever been stored in it
    fn read(&self) -> Result<Option<String>, Box<dyn Error>>;
    /// Replaces the whole content of the slot
    fn write(&mut self, content: &str) -> Result<(), Box<dyn Error>>;
}
