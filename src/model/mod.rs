//! Plain value types shared by the inventory store, the order recorder and the order session.

pub mod cart;
pub mod item;
pub mod order;

pub use cart::*;
pub use item::*;
pub use order::*;
