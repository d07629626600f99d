//! Singly-linked queue of owned text payloads
//!
//! Design:
//! - Node: owns its payload and its successor (linked list cell)
//! - TextQueue: owns the chain through `head`; `tail` is a non-owning raw
//!   cursor to the last node for O(1) tail insertion
//!
//! Invariants maintained between operations:
//! - `size == 0` iff `head` is `None` iff `tail` is null
//! - following `next` from head reaches tail in exactly `size` hops, and the
//!   tail node's `next` is `None`
//! - a single-element queue has head and tail referring to the same node
//! - no node is reachable from the chain more than once

use std::ptr;

type Link = Option<Box<Node>>;

struct Node {
    value: String,
    next: Link,
}

/// A singly-linked FIFO queue of strings.
///
/// Insertion is O(1) at both ends; removal is O(1) at the head. `reverse`
/// relinks the chain in place in O(n) time and O(1) extra space, and `sort`
/// orders payloads ascending by byte-wise comparison using a stable merge
/// sort over the links (no node is allocated or freed by either).
///
/// The queue is a bare data structure: it is not safe for concurrent
/// mutation from multiple threads without external locking. The raw tail
/// cursor keeps it `!Send` and `!Sync`, so the compiler enforces that
/// contract.
pub struct TextQueue {
    head: Link,
    tail: *mut Node,
    size: usize,
}

impl TextQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        TextQueue {
            head: None,
            tail: ptr::null_mut(),
            size: 0,
        }
    }

    /// Number of elements in the queue.
    pub fn len(&self) -> usize {
        self.size
    }

    /// True when the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Read-only view of the head payload.
    pub fn front(&self) -> Option<&str> {
        self.head.as_deref().map(|node| node.value.as_str())
    }

    /// Inserts a copy of `s` at the head of the queue.
    ///
    /// The payload is copied into storage owned by the new node; the queue
    /// never aliases caller-provided storage.
    pub fn insert_head(&mut self, s: &str) {
        debug_assert_eq!(self.tail.is_null(), self.size == 0);
        let mut node = Box::new(Node {
            value: s.to_owned(),
            next: self.head.take(),
        });
        if self.tail.is_null() {
            // first element: head and tail are the same node
            self.tail = &mut *node;
        }
        self.head = Some(node);
        self.size += 1;
    }

    /// Inserts a copy of `s` at the tail of the queue.
    pub fn insert_tail(&mut self, s: &str) {
        // Tail maintenance is tied to size: the null-tail branch is exactly
        // the empty-queue branch, so a live tail pointer is never null here.
        debug_assert_eq!(self.tail.is_null(), self.size == 0);
        let mut node = Box::new(Node {
            value: s.to_owned(),
            next: None,
        });
        let raw: *mut Node = &mut *node;
        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // SAFETY: tail is non-null, so it points at the last node of the
            // chain owned by `self.head`. Box contents have stable addresses,
            // and tail is updated on every structural mutation, so the
            // pointee is live.
            unsafe {
                (*self.tail).next = Some(node);
            }
        }
        self.tail = raw;
        self.size += 1;
    }

    /// Removes the head element, copying its payload into `out`.
    ///
    /// At most `out.len() - 1` payload bytes are copied, followed by a NUL
    /// terminator; longer payloads are silently truncated. Returns false on
    /// an empty queue or a zero-length buffer, leaving the queue unchanged.
    /// The node is unlinked and freed only together with a successful
    /// copy-out.
    pub fn remove_head(&mut self, out: &mut [u8]) -> bool {
        if out.is_empty() {
            return false;
        }
        let Some(node) = self.head.take() else {
            return false;
        };
        let Node { value, next } = *node;
        let copied = value.len().min(out.len() - 1);
        out[..copied].copy_from_slice(&value.as_bytes()[..copied]);
        out[copied] = 0;
        self.head = next;
        self.size -= 1;
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        true
    }

    /// Removes the head element and returns its payload, or `None` if the
    /// queue is empty. The caller may drop the returned value to discard
    /// the element without capturing it.
    pub fn take_head(&mut self) -> Option<String> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.size -= 1;
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        Some(value)
    }

    /// Reverses the chain in place.
    ///
    /// Walks the chain once, relinking each `next` backward: O(n) time, O(1)
    /// extra space, no node allocated or freed. Queues of 0 or 1 elements
    /// are left untouched.
    pub fn reverse(&mut self) {
        if self.size <= 1 {
            return;
        }
        // The old head becomes the new tail. Its heap slot is stable while
        // the boxes are shuffled below, so the cursor stays valid.
        let first: *mut Node = match self.head.as_deref_mut() {
            Some(node) => node,
            None => return,
        };
        let mut prev: Link = None;
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
        self.tail = first;
    }

    /// Sorts payloads ascending by byte-wise comparison.
    ///
    /// Bottoms out on chains of length 0/1, splits with a slow/fast walk and
    /// merges stably (equal elements keep their relative order). Merging
    /// relinks existing nodes; nothing is allocated or freed. Queues of 0 or
    /// 1 elements are left untouched, tail included.
    pub fn sort(&mut self) {
        if self.size <= 1 {
            return;
        }
        self.head = sort_chain(self.head.take());
        // The merge hands back the new head directly; the new tail is found
        // by walking to the last node.
        let mut last: *mut Node = ptr::null_mut();
        let mut cur = self.head.as_mut();
        while let Some(node) = cur {
            last = &mut **node;
            cur = node.next.as_mut();
        }
        self.tail = last;
    }

    /// Front-to-back iterator over the payloads.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Default for TextQueue {
    fn default() -> Self {
        TextQueue::new()
    }
}

impl Drop for TextQueue {
    fn drop(&mut self) {
        // Unlink nodes one at a time so teardown of a long chain cannot
        // recurse through nested Box drops and overflow the stack.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.tail = ptr::null_mut();
    }
}

/// Front-to-back iterator over a queue's payloads.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value.as_str())
    }
}

/// Merge sort over a detached chain. Recursion depth is O(log n); the merge
/// itself is iterative.
fn sort_chain(chain: Link) -> Link {
    let mut front = match chain {
        Some(node) => node,
        None => return None,
    };
    if front.next.is_none() {
        return Some(front);
    }
    let back = split(&mut front);
    merge(sort_chain(Some(front)), sort_chain(back))
}

/// Detaches and returns the back half of the chain starting at `front`,
/// leaving the front half attached. Relative order within each half is
/// preserved.
fn split(front: &mut Box<Node>) -> Link {
    // Slow/fast walk: fast advances two links per step, slow one. When fast
    // runs out, slow sits just before the midpoint. The fast cursor only
    // reads, so the hop count is recorded first and the detach walk reuses
    // it mutably.
    let mut hops = 0usize;
    let mut fast = front.next.as_deref();
    while let Some(node) = fast {
        match node.next.as_deref() {
            Some(step) => {
                hops += 1;
                fast = step.next.as_deref();
            }
            None => break,
        }
    }
    let mut i = 0usize;
    let mut cur = Some(front);
    while let Some(node) = cur {
        if i == hops {
            return node.next.take();
        }
        i += 1;
        cur = node.next.as_mut();
    }
    None
}

/// Merges two sorted chains into one, relinking existing nodes only.
fn merge(mut left: Link, mut right: Link) -> Link {
    let mut merged: Link = None;
    let mut tail = &mut merged;
    loop {
        let node = match (left, right) {
            (None, rest) | (rest, None) => {
                // one side exhausted: splice the remainder wholesale
                *tail = rest;
                break;
            }
            (Some(mut l), Some(mut r)) => {
                // on a tie take from the left chain, which keeps the sort
                // stable
                if l.value <= r.value {
                    left = l.next.take();
                    right = Some(r);
                    l
                } else {
                    right = r.next.take();
                    left = Some(l);
                    r
                }
            }
        };
        let slot = tail;
        tail = &mut slot.insert(node).next;
    }
    merged
}
