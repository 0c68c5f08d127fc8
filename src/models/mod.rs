//! Data models
//!
//! Plain value types passed between callers and the pricing core.

mod item;

pub use item::{Item, NamedItem};
