mod cart_client;
mod macros;

pub use cart_client::*;
