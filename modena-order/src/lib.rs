pub mod order;
pub mod traversal;

pub use order::{Order, OrderError};
pub use traversal::OrderTraversal;
