pub use client::SportsClient;
pub use error::{Result, SportsError};
pub use favorites::FavoritesStore;

pub mod classify;
pub mod client;
pub mod error;
pub mod favorites;
pub mod listing;
pub mod model;
pub(crate) mod sportsdb;
pub mod storage;
