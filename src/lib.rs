pub mod app;
pub mod config;
pub mod db;
pub mod domains;
pub mod error;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use utils::error::AppError;
