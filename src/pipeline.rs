use bytes::Bytes;

use crate::parser::WordParser;
use crate::ranker::TopWords;
use crate::trie::{TrieStats, WordTrie};

/// One word-frequency pass: owns the trie and the ranked list exclusively
/// for the duration of the run. Feed any number of chunks, call `finish`
/// once, then read the result off with `emit_sorted`.
pub struct Pipeline {
    trie: WordTrie,
    ranked: TopWords,
    parser: WordParser,
}

impl Pipeline {
    pub fn new(k: usize) -> Pipeline {
        let trie = WordTrie::new();
        let parser = WordParser::new(&trie);
        Pipeline {
            trie,
            ranked: TopWords::new(k),
            parser,
        }
    }

    pub fn feed(&mut self, chunk: &[u8]) {
        self.parser.feed(&mut self.trie, &mut self.ranked, chunk);
    }

    pub fn finish(&mut self) {
        self.parser.finish(&mut self.trie, &mut self.ranked);
    }

    /// The top-K words, most frequent first. Only valid after `finish`.
    pub fn emit_sorted(&self) -> Vec<(u32, Bytes)> {
        self.ranked.emit_sorted()
    }

    pub fn total_words(&self) -> u64 {
        self.parser.total_words()
    }

    pub fn trie_stats(&self) -> TrieStats {
        self.trie.stats()
    }
}

/// One-shot pass over `source` returning the `k` most frequent words with
/// their counts, descending.
pub fn run(source: &[u8], k: usize) -> Vec<(u32, Bytes)> {
    let mut pipeline = Pipeline::new(k);
    pipeline.feed(source);
    pipeline.finish();
    pipeline.emit_sorted()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_counts_and_ranks() {
        let result = run(b"to be or not to be", 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].0, 2);
        assert_eq!(&result[0].1[..], b"to");
        assert_eq!(result[1].0, 2);
        assert_eq!(&result[1].1[..], b"be");
    }

    #[test]
    fn chunked_feed_matches_one_shot_run() {
        let input = b"the quick brown fox jumps over the lazy dog the fox";
        let whole = run(input, 4);
        for split in 0..=input.len() {
            let mut pipeline = Pipeline::new(4);
            pipeline.feed(&input[..split]);
            pipeline.feed(&input[split..]);
            pipeline.finish();
            assert_eq!(pipeline.emit_sorted(), whole, "split at {}", split);
        }
    }

    #[test]
    fn summary_accessors_reflect_the_pass() {
        let mut pipeline = Pipeline::new(3);
        pipeline.feed(b"cat dog cat");
        pipeline.finish();
        assert_eq!(pipeline.total_words(), 3);
        let stats = pipeline.trie_stats();
        assert_eq!(stats.word_count, 2);
        // root, c-a-t, d-o-g
        assert_eq!(stats.node_count, 7);
    }
}
