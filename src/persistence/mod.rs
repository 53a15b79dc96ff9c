//! Save record encoding and on-disk storage.

pub mod codec;
pub mod save_manager;

pub use codec::{decode, encode};
pub use save_manager::SaveManager;
