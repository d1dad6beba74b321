//! The cart actor: owns the cart, applies mutations one at a time, and writes
//! every committed cart through to the key-value store.

mod error;
mod messages;
mod service;

pub use error::*;
pub use messages::*;
pub use service::*;
