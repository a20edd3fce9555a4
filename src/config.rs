//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The name of the persistent storage slot the task list lives in
/// (for [`crate::FileStorage`], the file name without its `.json` extension).
/// Feel free to override it when initing this library.
pub static STORAGE_KEY: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("golden-tasks".to_string())));

/// The application name, used as the directory name under the user's configuration directory.
/// Feel free to override it when initing this library.
pub static APP_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("golden-scheduler".to_string())));
