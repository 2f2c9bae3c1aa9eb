// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::fmt;

use crate::node::ListNode;

/// An ordered sequence of integers. Insertion order is preserved and
/// duplicates are allowed.
///
/// This is also the container [`Graph`](crate::graph::Graph) hands back from
/// its queries; every list it returns is a fresh allocation owned by the
/// caller.
#[derive(Default)]
pub struct LinkedList {
    head: Option<Box<ListNode>>,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub fn head(&self) -> Option<&ListNode> {
        self.head.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert at the front.
    pub fn push_front(&mut self, value: i32) {
        let mut node = Box::new(ListNode::new(value));
        node.set_next(self.head.take());
        self.head = Some(node);
        self.len += 1;
    }

    /// Insert at the back.
    pub fn push_back(&mut self, value: i32) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ListNode::new(value)));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<i32> {
        let mut node = self.head.take()?;
        self.head = node.take_next();
        self.len -= 1;
        Some(node.value())
    }

    pub fn contains(&self, value: i32) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Remove the first node holding `value`. Returns whether one was found.
    pub fn delete(&mut self, value: i32) -> bool {
        self.remove_matching(value, 1) == 1
    }

    /// Remove every node holding `value`, returning how many were removed.
    pub fn delete_all(&mut self, value: i32) -> usize {
        self.remove_matching(value, usize::MAX)
    }

    /// Relink the chain, dropping up to `limit` nodes that hold `value`.
    fn remove_matching(&mut self, value: i32, limit: usize) -> usize {
        let mut removed = 0;
        let mut rest = self.head.take();
        let mut tail = &mut self.head;
        while let Some(mut node) = rest {
            if removed == limit {
                *tail = Some(node);
                break;
            }
            rest = node.take_next();
            if node.value == value {
                removed += 1;
                continue;
            }
            tail = &mut tail.insert(node).next;
        }
        self.len -= removed;
        removed
    }

    pub fn clear(&mut self) {
        // unlink one node at a time so a long list doesn't recurse in drop
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.take_next();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl Extend<i32> for LinkedList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        // find the tail once instead of walking for every push
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            cursor = &mut cursor.insert(Box::new(ListNode::new(value))).next;
            self.len += 1;
        }
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a> {
    next: Option<&'a ListNode>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[1] -> [2] -> [3]`, or `LinkedList is empty`.
impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "LinkedList is empty");
        }
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "[{}]", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedList;

    #[test]
    fn test_push_front_and_back() {
        let mut list = LinkedList::new();
        assert!(list.is_empty());

        list.push_back(2);
        list.push_front(1);
        list.push_back(3);

        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.head().map(|n| n.value()), Some(1));
    }

    #[test]
    fn test_delete_first_occurrence() {
        let mut list: LinkedList = [4, 1, 4, 2].into_iter().collect();

        assert!(list.delete(4));
        assert_eq!(list.to_vec(), vec![1, 4, 2]);
        assert!(!list.delete(9));
        assert!(list.delete(2));
        assert_eq!(list.to_vec(), vec![1, 4]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_all() {
        let mut list: LinkedList = [7, 7, 1, 7, 2, 7].into_iter().collect();
        assert_eq!(list.delete_all(7), 4);
        assert_eq!(list.to_vec(), vec![1, 2]);
        assert_eq!(list.delete_all(7), 0);
    }

    #[test]
    fn test_pop_front() {
        let mut list: LinkedList = (1..=3).collect();
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut list: LinkedList = [1].into_iter().collect();
        list.extend([2, 3]);
        list.extend(std::iter::empty());
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn test_display() {
        let list: LinkedList = [1, 2, 3].into_iter().collect();
        assert_eq!(list.to_string(), "[1] -> [2] -> [3]");
        assert_eq!(LinkedList::new().to_string(), "LinkedList is empty");
    }

    #[test]
    fn test_long_list_drops() {
        let list: LinkedList = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original: LinkedList = [1, 2].into_iter().collect();
        let copy = original.clone();
        original.push_back(3);
        assert_eq!(copy.to_vec(), vec![1, 2]);
    }
}
