//! A generic last-in, first-out stack.
//!
//! The top of a [`Stack`] is the most recently pushed element that has not
//! been popped yet. Every read that walks more than one element (`iter`,
//! `each`, `slice`) goes from the top down to the oldest element.

mod lifo;

pub use lifo::{IntoIter, Iter, Stack};
