//! Shared types for the Bakehouse menu service
//!
//! Common types used by the server and by admin/storefront clients:
//! catalog models, price-text parsing and the client-local cart.

pub mod cart;
pub mod models;
pub mod price;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{Cart, CartError, CartLine, OrderMessage};
pub use models::{Category, MenuItem};
pub use price::{InvalidPrice, format_grouped, parse_price};
