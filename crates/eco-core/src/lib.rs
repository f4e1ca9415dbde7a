//! Eco-Life core: the user aggregate, its persistence discipline, and
//! the point-awarding rules.
//!
//! Presentation layers are external collaborators: they pass primitive
//! values into [`EcoCore`] and render the snapshots it returns. The core
//! persists through an injected [`store::StorageProvider`] and never
//! touches presentation.

pub mod catalog;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod store;
pub mod transfer;

pub use self::core::EcoCore;
pub use error::{CoreError, Result};
pub use models::{Achievement, Challenge, ChallengeStatus, EcoAction, Friend, User};
pub use store::{FileStorage, MemoryStorage, StorageProvider, UserStore};
