use crate::alphabet::ALPHABET_SIZE;

const NO_CHILD: u32 = u32::MAX;
const NO_SLOT: u32 = u32::MAX;

/// Stable identifier of a trie node, valid for the lifetime of its
/// `WordTrie`. Nodes are never removed mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

struct Node {
    terminal: bool,
    rank_slot: u32,
    count: u32,
    children: [u32; ALPHABET_SIZE],
}

impl Node {
    fn new() -> Node {
        Node {
            terminal: false,
            rank_slot: NO_SLOT,
            count: 0,
            children: [NO_CHILD; ALPHABET_SIZE],
        }
    }
}

pub struct TrieStats {
    /// Total allocated nodes, root included.
    pub node_count: usize,
    /// Distinct words observed (terminal nodes).
    pub word_count: usize,
}

/// 26-ary prefix tree over letter indices, arena-allocated. Every distinct
/// word maps to exactly one node, which carries the running occurrence count
/// and the back-reference into the ranked list.
pub struct WordTrie {
    nodes: Vec<Node>,
}

impl WordTrie {
    pub fn new() -> WordTrie {
        WordTrie {
            nodes: vec![Node::new()],
        }
    }

    /// The always-present root. Never terminal itself.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Child of `node` for `letter_index`, created on first use.
    pub fn descend(&mut self, node: NodeId, letter_index: u8) -> NodeId {
        debug_assert!((letter_index as usize) < ALPHABET_SIZE);
        let child = self.nodes[node.0 as usize].children[letter_index as usize];
        if child != NO_CHILD {
            return NodeId(child);
        }
        let child = self.nodes.len() as u32;
        self.nodes.push(Node::new());
        self.nodes[node.0 as usize].children[letter_index as usize] = child;
        NodeId(child)
    }

    /// Marks `node` as a word endpoint and bumps its count by one.
    /// Returns the new count. Counts only ever grow within a run.
    pub fn record_occurrence(&mut self, node: NodeId) -> u32 {
        let node = &mut self.nodes[node.0 as usize];
        node.terminal = true;
        node.count += 1;
        node.count
    }

    #[inline]
    pub fn count(&self, node: NodeId) -> u32 {
        self.nodes[node.0 as usize].count
    }

    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].terminal
    }

    /// Slot the word currently occupies in the ranked list, if any.
    #[inline]
    pub fn rank_slot(&self, node: NodeId) -> Option<u32> {
        match self.nodes[node.0 as usize].rank_slot {
            NO_SLOT => None,
            slot => Some(slot),
        }
    }

    #[inline]
    pub fn set_rank_slot(&mut self, node: NodeId, slot: u32) {
        debug_assert!(slot != NO_SLOT);
        self.nodes[node.0 as usize].rank_slot = slot;
    }

    #[inline]
    pub fn clear_rank_slot(&mut self, node: NodeId) {
        self.nodes[node.0 as usize].rank_slot = NO_SLOT;
    }

    pub fn stats(&self) -> TrieStats {
        TrieStats {
            node_count: self.nodes.len(),
            word_count: self.nodes.iter().filter(|n| n.terminal).count(),
        }
    }
}
