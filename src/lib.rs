//! Terminal todo list: a task store mirrored to a key-value slot on disk,
//! rendered through interchangeable terminal skins.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod store;
pub mod task;
pub mod ui;

pub use app::App;
pub use error::{StorageError, StoreError};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};
pub use store::{Action, Stats, TodoStore};
pub use task::{Category, Priority, Task};
