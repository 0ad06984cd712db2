use bytes::{BufMut, BytesMut};

use crate::alphabet::{classify, letter_char};
use crate::ranker::TopWords;
use crate::trie::{NodeId, WordTrie};

/// Longest word tracked in full. Letters past this bound are consumed but
/// neither stored nor descended, so all words agreeing on their first
/// `MAX_WORD_LEN` letters share one trie node and one count.
pub const MAX_WORD_LEN: usize = 250;

/// Byte-level state machine that segments the input into words at non-letter
/// boundaries and drives the trie and the ranked list on each completion.
/// Words carry across `feed` chunk edges; call `finish` once at end of input.
pub struct WordParser {
    node: NodeId,
    word: BytesMut,
    total_words: u64,
}

impl WordParser {
    pub fn new(trie: &WordTrie) -> WordParser {
        WordParser {
            node: trie.root(),
            word: BytesMut::with_capacity(MAX_WORD_LEN),
            total_words: 0,
        }
    }

    pub fn feed(&mut self, trie: &mut WordTrie, ranked: &mut TopWords, chunk: &[u8]) {
        for &byte in chunk {
            match classify(byte) {
                Some(index) => {
                    if self.word.len() < MAX_WORD_LEN {
                        self.word.put_u8(letter_char(index));
                        self.node = trie.descend(self.node, index);
                    }
                }
                None => self.complete_word(trie, ranked),
            }
        }
    }

    /// Completes a word left pending by input ending without a trailing
    /// delimiter. A run of delimiters (or no input at all) leaves nothing
    /// pending, so the root is never marked terminal.
    pub fn finish(&mut self, trie: &mut WordTrie, ranked: &mut TopWords) {
        self.complete_word(trie, ranked);
    }

    fn complete_word(&mut self, trie: &mut WordTrie, ranked: &mut TopWords) {
        if self.word.is_empty() {
            return;
        }
        let count = trie.record_occurrence(self.node);
        ranked.observe(trie, self.node, &self.word, count);
        self.total_words += 1;
        self.word.clear();
        self.node = trie.root();
    }

    /// Word occurrences completed so far (not distinct words).
    pub fn total_words(&self) -> u64 {
        self.total_words
    }
}
