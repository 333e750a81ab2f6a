pub mod iter;
pub mod stack;

pub use iter::{IntoIter, Iter};
pub use stack::Stack;
