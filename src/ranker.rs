use bytes::Bytes;

use crate::trie::{NodeId, WordTrie};

/// One of up to K tracked words. `count` mirrors the trie node's count as of
/// the last `observe`; the node's `rank_slot` always points back at the slot
/// this entry occupies.
struct RankEntry {
    count: u32,
    word: Bytes,
    node: NodeId,
}

/// Fixed-capacity ranked list of the most frequent words, kept fully sorted
/// descending by count after every update. Ties keep discovery order: a word
/// never overtakes an earlier word with the same count.
pub struct TopWords {
    capacity: usize,
    entries: Vec<RankEntry>,
}

impl TopWords {
    pub fn new(capacity: usize) -> TopWords {
        TopWords {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Called after the trie count for `node` was just incremented to
    /// `new_count`. Promotes an already-ranked word in place, inserts an
    /// unranked one if there is room or it beats the current minimum, and
    /// otherwise changes nothing.
    pub fn observe(&mut self, trie: &mut WordTrie, node: NodeId, word: &[u8], new_count: u32) {
        if let Some(slot) = trie.rank_slot(node) {
            self.promote(trie, slot as usize, new_count);
            return;
        }
        if self.entries.len() < self.capacity {
            self.insert_sorted(trie, node, word, new_count);
            return;
        }
        let min_count = match self.entries.last() {
            Some(last) => last.count,
            None => return, // capacity zero tracks nothing
        };
        if new_count > min_count {
            let evicted = self.entries.pop().expect("list is non-empty");
            trie.clear_rank_slot(evicted.node);
            self.insert_sorted(trie, node, word, new_count);
        }
    }

    /// Bubble the entry at `slot` toward the front until descending order is
    /// restored, re-pointing both rank slots on every swap.
    fn promote(&mut self, trie: &mut WordTrie, slot: usize, new_count: u32) {
        self.entries[slot].count = new_count;
        let mut i = slot;
        while i > 0 && self.entries[i - 1].count < self.entries[i].count {
            self.entries.swap(i - 1, i);
            trie.set_rank_slot(self.entries[i - 1].node, (i - 1) as u32);
            trie.set_rank_slot(self.entries[i].node, i as u32);
            i -= 1;
        }
    }

    /// Insert after all entries with a count >= `count`, shifting the rest
    /// back one slot and re-pointing every moved entry's rank slot.
    fn insert_sorted(&mut self, trie: &mut WordTrie, node: NodeId, word: &[u8], count: u32) {
        let pos = self
            .entries
            .iter()
            .position(|entry| entry.count < count)
            .unwrap_or_else(|| self.entries.len());
        self.entries.insert(
            pos,
            RankEntry {
                count,
                word: Bytes::copy_from_slice(word),
                node,
            },
        );
        for slot in pos..self.entries.len() {
            trie.set_rank_slot(self.entries[slot].node, slot as u32);
        }
    }

    /// The ranked words, most frequent first. Already sorted by
    /// construction; this is a plain front-to-back read.
    pub fn emit_sorted(&self) -> Vec<(u32, Bytes)> {
        self.entries
            .iter()
            .map(|entry| (entry.count, entry.word.clone()))
            .collect()
    }
}
