use std::iter::{FusedIterator, Rev};
use std::slice;
use std::vec;

/// Borrowing iterator over a stack, from the top down.
///
/// Created by [`Stack::iter`](super::Stack::iter). Iterating from the back
/// walks from the oldest element up to the top.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    items: Rev<slice::Iter<'a, T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            items: items.iter().rev(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.items.nth(n)
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator that drains a stack from the top down.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    items: Rev<vec::IntoIter<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter().rev(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
