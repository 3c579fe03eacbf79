//! Chunked arena that owns the nodes of a tree and hands out copyable handles to them.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// Number of nodes allocated per chunk when no chunk size is given.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// A handle to an object stored in a `TypedArena<T>`.
///
/// Handles carry no ownership: they can be copied freely and are only meaningful to the arena
/// that produced them. `Entry::NIL` never refers to an allocated object and is used by the trees
/// in this crate as the sentinel leaf.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    chunk_index: usize,
    block_index: usize,
}

impl Entry {
    /// The reserved handle that is never returned by `TypedArena::allocate`.
    pub const NIL: Entry = Entry {
        chunk_index: usize::MAX,
        block_index: usize::MAX,
    };

    /// Returns `true` if this handle is `Entry::NIL`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::{Entry, TypedArena};
    ///
    /// let mut arena = TypedArena::new(16);
    /// assert!(Entry::NIL.is_nil());
    /// assert!(!arena.allocate(0).is_nil());
    /// ```
    pub fn is_nil(self) -> bool {
        self == Entry::NIL
    }
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<Entry>),
}

/// An allocator for a single type of object.
///
/// Objects live in fixed-size chunks so that growing the arena never moves existing objects.
/// Freed blocks are threaded onto a free list and reused by later allocations. Everything still
/// allocated is dropped together with the arena.
///
/// # Examples
///
/// ```
/// use ordered_trees::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct TypedArena<T> {
    head: Option<Entry>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn is_valid_entry(&self, entry: Entry) -> bool {
        entry.chunk_index < self.chunks.len()
            && entry.block_index < self.chunks[entry.chunk_index].len()
    }

    /// Constructs a new, empty `TypedArena<T>` holding `chunk_size` objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be non-zero.");
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    /// Moves `value` into the arena and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Entry {
        if self.len == self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }
        self.len += 1;

        match self.head.take() {
            // with an empty free list only the last chunk can have room
            None => {
                let chunk_index = self.chunks.len() - 1;
                let chunk = &mut self.chunks[chunk_index];
                chunk.push(Block::Occupied(value));
                Entry {
                    chunk_index,
                    block_index: chunk.len() - 1,
                }
            },
            Some(entry) => {
                let block = mem::replace(
                    &mut self.chunks[entry.chunk_index][entry.block_index],
                    Block::Occupied(value),
                );
                match block {
                    Block::Vacant(next) => {
                        self.head = next;
                        entry
                    },
                    Block::Occupied(_) => panic!("Error: free list points at an occupied block."),
                }
            },
        }
    }

    /// Removes the object behind `entry` from the arena and returns it. The block is reused by a
    /// later allocation.
    ///
    /// # Panics
    ///
    /// Panics if `entry` is invalid or already freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// ```
    pub fn free(&mut self, entry: Entry) -> T {
        if !self.is_valid_entry(entry) {
            panic!("Error: attempting to free invalid block.");
        }
        let block = &mut self.chunks[entry.chunk_index][entry.block_index];
        if let Block::Vacant(_) = block {
            panic!("Error: attempting to free vacant block.");
        }
        match mem::replace(block, Block::Vacant(self.head.take())) {
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(entry);
                value
            },
            Block::Vacant(_) => unreachable!(),
        }
    }

    /// Returns an immutable reference to the object behind `entry`, or `None` if the handle is
    /// invalid or vacant.
    pub fn get(&self, entry: Entry) -> Option<&T> {
        if !self.is_valid_entry(entry) {
            return None;
        }
        match self.chunks[entry.chunk_index][entry.block_index] {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the object behind `entry`, or `None` if the handle is
    /// invalid or vacant.
    pub fn get_mut(&mut self, entry: Entry) -> Option<&mut T> {
        if !self.is_valid_entry(entry) {
            return None;
        }
        match self.chunks[entry.chunk_index][entry.block_index] {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of objects each chunk holds.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Drops every object in the arena and releases its chunks.
    pub fn clear(&mut self) {
        self.head = None;
        self.chunks.clear();
        self.len = 0;
        self.capacity = 0;
    }
}

impl<T> Index<Entry> for TypedArena<T> {
    type Output = T;

    fn index(&self, entry: Entry) -> &Self::Output {
        self.get(entry).expect("Error: entry out of bounds.")
    }
}

impl<T> IndexMut<Entry> for TypedArena<T> {
    fn index_mut(&mut self, entry: Entry) -> &mut Self::Output {
        self.get_mut(entry).expect("Error: entry out of bounds.")
    }
}
