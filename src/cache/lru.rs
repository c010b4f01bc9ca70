//! LRU Order Module
//!
//! Doubly linked recency order over resident keys, stored as an arena of
//! index-linked nodes. Indices are stable for the lifetime of a node, so the
//! store can keep a direct key -> node mapping and promote in O(1) with an
//! unlink + relink instead of a scan. Freed slots are recycled through a
//! free list.

use std::mem;

/// Sentinel index for "no node".
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    key: String,
    prev: usize,
    next: usize,
}

// == LRU List ==
/// Tracks access order for LRU eviction.
///
/// Head = most recently used, tail = least recently used.
#[derive(Debug)]
pub struct LruList {
    /// Node arena; slots on the free list hold an empty key
    nodes: Vec<Node>,
    /// Indices of recycled slots
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl LruList {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a new key at the most-recently-used position.
    ///
    /// Returns the node index, stable until the node is removed.
    pub fn push_front(&mut self, key: String) -> usize {
        let idx = self.alloc(key);
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Promotes an existing node to most-recently-used.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Unlinks a node and recycles its slot, returning its key.
    pub fn remove(&mut self, idx: usize) -> String {
        self.unlink(idx);
        self.len -= 1;
        self.free.push(idx);
        mem::take(&mut self.nodes[idx].key)
    }

    // == Pop Back ==
    /// Removes and returns the least-recently-used key, if any.
    pub fn pop_back(&mut self) -> Option<String> {
        if self.tail == NIL {
            return None;
        }
        let tail = self.tail;
        Some(self.remove(tail))
    }

    // == Accessors ==
    /// Least-recently-used key without removing it.
    #[allow(dead_code)]
    pub fn back(&self) -> Option<&str> {
        self.node_key(self.tail)
    }

    /// Most-recently-used key.
    #[allow(dead_code)]
    pub fn front(&self) -> Option<&str> {
        self.node_key(self.head)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops all nodes and resets the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    // == Internal: node management ==
    #[allow(dead_code)]
    fn node_key(&self, idx: usize) -> Option<&str> {
        if idx == NIL {
            None
        } else {
            Some(self.nodes[idx].key.as_str())
        }
    }

    fn alloc(&mut self, key: String) -> usize {
        if let Some(idx) = self.free.pop() {
            let node = &mut self.nodes[idx];
            node.key = key;
            node.prev = NIL;
            node.next = NIL;
            idx
        } else {
            self.nodes.push(Node {
                key,
                prev: NIL,
                next: NIL,
            });
            self.nodes.len() - 1
        }
    }

    fn link_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }
}

impl Default for LruList {
    fn default() -> Self {
        Self::new()
    }
}
