// src/core/mod.rs

pub mod error;
pub mod extract;
pub mod html;
pub mod net;
pub mod normalize;

pub use error::Failure;
pub use net::{HttpSource, PageSource};
