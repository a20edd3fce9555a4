//! This module provides the available storage backends

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::traits::Storage;

/// A storage slot that lives in a single file on disk
#[derive(Debug, PartialEq)]
pub struct FileStorage {
    backing_file: PathBuf,
}

impl FileStorage {
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
        }
    }

    /// Get the default path to the storage file
    pub fn default_file() -> PathBuf {
        let app_name = crate::config::APP_NAME.lock().unwrap().clone();
        let storage_key = crate::config::STORAGE_KEY.lock().unwrap().clone();
        PathBuf::from(format!("~/.config/{}/{}.json", app_name, storage_key))
    }

    pub fn file(&self) -> &Path {
        &self.backing_file
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<String>, Box<dyn Error>> {
        if self.backing_file.exists() == false {
            return Ok(None);
        }
        match fs::read_to_string(&self.backing_file) {
            Err(err) => Err(format!("Unable to open file {:?}: {}", self.backing_file, err).into()),
            Ok(content) => Ok(Some(content)),
        }
    }

    fn write(&mut self, content: &str) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.backing_file.parent() {
            if parent.as_os_str().is_empty() == false {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.backing_file, content)?;
        Ok(())
    }
}

/// A storage slot that lives in memory, so that the task store can be exercised
/// without touching the disk
#[derive(Default, Debug, PartialEq)]
pub struct MemoryStorage {
    content: Option<String>,

    /// Describes how the next `write` calls will behave during a test.
    /// So that writes fail _n_ times after _m_ initial successes, set `(m, n)`
    write_behaviour: (u32, u32),
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds the given content
    pub fn with_content(content: String) -> Self {
        Self {
            content: Some(content),
            write_behaviour: (0, 0),
        }
    }

    /// The current content of the slot, if any
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Make `write` fail `n_fails` times, after `n_successes` initial successes
    pub fn fail_writes(&mut self, n_successes: u32, n_fails: u32) {
        self.write_behaviour = (n_successes, n_fails);
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.content.clone())
    }

    fn write(&mut self, content: &str) -> Result<(), Box<dyn Error>> {
        match self.write_behaviour {
            (0, 0) => (),
            (0, ref mut n) => {
                *n -= 1;
                return Err("mocked write failure".into());
            }
            (ref mut m, _) => {
                *m -= 1;
            }
        }
        self.content = Some(content.to_string());
        Ok(())
    }
}
