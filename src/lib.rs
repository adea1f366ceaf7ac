//! ferrofetch library
//!
//! A fast and simple system information fetch tool written in Rust: it
//! collects host facts and lays them out beside a distribution logo.

pub mod collectors;
pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod fields;
pub mod logo;
pub mod utils;

pub use color::Color;
pub use config::Config;
pub use display::{build_info_rows, compose, InfoRow, RenderContext, RenderOptions};
pub use error::{FerrofetchError, Result};
pub use fields::{FieldKind, FieldSpec};
pub use logo::Logo;
