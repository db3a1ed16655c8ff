//! Core domain entities.
//!
//! - [`ShortUrl`] - A shortened URL mapping with its derived visitor count
//! - [`Visit`] - A recorded redirect, with [`NewVisit`] as its creation input
//!
//! Entities are plain data; behavior lives in
//! [`crate::application::services`].

pub mod short_url;
pub mod visit;

pub use short_url::ShortUrl;
pub use visit::{NewVisit, Visit};
