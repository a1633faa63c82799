//! Ordered container used for every variable-length grammar list in the tree.
//!
//! Port lists, arguments, case items, concatenation elements and the like are
//! all stored in a [`NodeList`]. Order is insertion order: `append` adds at the
//! end, `prepend` at the front, and neither reorders existing elements.
//!
//! Storage is a ring buffer so both ends grow in amortised constant time and
//! indexed lookup stays constant time.

use std::collections::VecDeque;
use std::collections::vec_deque;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NodeList<T> {
    items: VecDeque<T>,
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds `element` as the new last entry.
    pub fn append(&mut self, element: T) {
        self.items.push_back(element);
    }

    /// Adds `element` as the new first entry, shifting every existing index up by one.
    pub fn prepend(&mut self, element: T) {
        self.items.push_front(element);
    }

    /// Moves every element of `other` onto the end of this list, in order.
    pub fn concat(&mut self, other: NodeList<T>) {
        self.items.extend(other.items);
    }

    /// Returns the element at `index`, or `None` past the end of the list.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> From<Vec<T>> for NodeList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for NodeList<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
