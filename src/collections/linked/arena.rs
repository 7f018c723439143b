use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to a node stored in an [`Arena`].
///
/// A NodeId pairs a slot with the generation of the node that occupied it when the id was handed
/// out. Removing a node bumps its slot's generation, so an id kept past the removal never
/// resolves again, even after the slot is reused for another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Returns the raw slot index, for debugging or external maps. Ids of removed nodes can share
    /// an index with live ones.
    pub const fn as_raw(self) -> usize {
        self.index
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

enum Entry<N> {
    Occupied(N),
    Vacant { next_free: Option<usize> },
}

struct Slot<N> {
    generation: u32,
    entry: Entry<N>,
}

/// A slab of nodes addressed by [`NodeId`], with vacated slots reused through a free list.
///
/// Structures that need links in both directions (or links that loop back on themselves) store
/// their nodes here and link them by id, so no node is ever owned twice.
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Option<usize>,
    len: usize,
}

impl<N> Arena<N> {
    pub const fn new() -> Arena<N> {
        Arena {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    /// Returns the number of live nodes in the Arena.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the id the next call to [`insert`](Arena::insert) will hand out.
    fn next_id(&self) -> NodeId {
        match self.free {
            Some(index) => NodeId {
                index,
                generation: self.slots[index].generation,
            },
            None => NodeId {
                index: self.slots.len(),
                generation: 0,
            },
        }
    }

    /// Stores `node` in a free slot, growing the Arena if there are none, and returns its id.
    pub fn insert(&mut self, node: N) -> NodeId {
        let id = self.next_id();
        self.len += 1;
        match self.slots.get_mut(id.index) {
            Some(slot) => {
                let vacated = mem::replace(&mut slot.entry, Entry::Occupied(node));
                if let Entry::Vacant { next_free } = vacated {
                    self.free = next_free;
                }
            },
            None => self.slots.push(Slot {
                generation: 0,
                entry: Entry::Occupied(node),
            }),
        }
        id
    }

    /// Stores the node built by `f`, which is given the id the node will occupy. This allows a node
    /// to link to itself.
    pub fn insert_with(&mut self, f: impl FnOnce(NodeId) -> N) -> NodeId {
        let id = self.next_id();
        let inserted = self.insert(f(id));
        debug_assert_eq!(id, inserted);
        inserted
    }

    fn slot(&self, id: NodeId) -> Option<&Slot<N>> {
        self.slots.get(id.index).filter(|slot| slot.generation == id.generation)
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot<N>> {
        self.slots.get_mut(id.index).filter(|slot| slot.generation == id.generation)
    }

    /// Removes the node with the provided id, returning it if the id was still live.
    pub fn remove(&mut self, id: NodeId) -> Option<N> {
        let free = self.free;
        let slot = self.slot_mut(id)?;
        if let Entry::Vacant { .. } = slot.entry {
            return None;
        }

        slot.generation = slot.generation.wrapping_add(1);
        let removed = mem::replace(&mut slot.entry, Entry::Vacant { next_free: free });
        self.free = Some(id.index);
        self.len -= 1;
        match removed {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&N> {
        match &self.slot(id)?.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        match &mut self.slot_mut(id)?.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Drops every node. Slots are kept and vacated, so ids handed out before the clear stay
    /// dead.
    pub fn clear(&mut self) {
        let mut free = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if let Entry::Occupied(_) = slot.entry {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.entry = Entry::Vacant { next_free: free };
            free = Some(index);
        }
        self.free = free;
        self.len = 0;
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    /// # Panics
    /// Panics if `id` doesn't refer to a live node. Structures only index with ids they linked
    /// themselves, so a dead id means a broken link.
    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("Arena node {id} isn't live!"),
        }
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("Arena node {id} isn't live!"),
        }
    }
}

impl<N: Debug> Debug for Arena<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().enumerate().filter_map(|(index, slot)| match &slot.entry {
                Entry::Occupied(node) => Some((
                    NodeId {
                        index,
                        generation: slot.generation,
                    },
                    node,
                )),
                Entry::Vacant { .. } => None,
            }))
            .finish()
    }
}
