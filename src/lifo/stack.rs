use log::trace;
use quickcheck::{Arbitrary, Gen};

use super::iter::{IntoIter, Iter};

/// A `Stack` is a growable last-in, first-out sequence.
///
/// Elements are kept oldest-first in a `Vec`, so the top of the stack is the
/// end of the vector and `push`, `pop` and `peek` are all O(1). Everything
/// that reads more than one element reports them newest-first.
///
/// The default value is an empty stack that is ready to use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stack<T> {
    inner: Vec<T>,
}

impl<T> Stack<T> {
    /// Instantiates an empty `Stack`.
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Instantiates an empty `Stack` with room for `capacity` elements
    /// before the backing store reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Push `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.inner.push(item);
    }

    /// Same as [`Stack::push`].
    pub fn add(&mut self, item: T) {
        self.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop every element. The allocation is kept for reuse.
    pub fn clear(&mut self) {
        if !self.inner.is_empty() {
            trace!("Clearing stack of {} elements", self.inner.len());
        }
        self.inner.clear();
    }

    /// Returns a clone of the top element, or `T::default()` if the stack is
    /// empty. Use [`Stack::peek`] to tell an empty stack apart from a
    /// default value on top.
    pub fn top(&self) -> T
    where
        T: Default + Clone,
    {
        self.peek(0).cloned().unwrap_or_default()
    }

    /// Returns the element `depth` positions below the top (`0` is the top),
    /// or `None` if the stack holds `depth` elements or fewer.
    pub fn peek(&self, depth: usize) -> Option<&T> {
        let len = self.inner.len();
        if depth >= len {
            return None;
        }
        self.inner.get(len - 1 - depth)
    }

    /// Removes and returns the top element. An empty stack is left untouched.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.inner.pop();
        if item.is_none() {
            trace!("Pop on an empty stack");
        }
        item
    }

    /// Calls `f` on each element from the top down, stopping as soon as `f`
    /// returns `false`.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for item in self.iter() {
            if !f(item) {
                break;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Copies the elements into a new `Vec`, top first.
    pub fn slice(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut items = self.inner.clone();
        items.reverse();
        items
    }

    /// Iterates from the top down without consuming the stack.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.inner)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the items in order; the last one becomes the top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the stack, yielding elements from the top down.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.inner)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Arbitrary> Arbitrary for Stack<T> {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.inner.shrink().map(|inner| Stack { inner }))
    }
}
