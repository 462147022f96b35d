pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod gate;
pub mod import;
pub mod intake;
pub mod session;
pub mod ui;

pub use error::{AppError, Result};
