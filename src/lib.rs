pub mod components;
pub mod configs;
pub mod effects;
mod error;
pub mod i18n;
mod routes;
mod tests;
pub mod utils;
mod views;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::error::PreferenceError;
