pub mod alphabet;
pub mod input;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod ranker;
pub mod trie;
pub mod util;

pub use crate::parser::MAX_WORD_LEN;
pub use crate::pipeline::{run, Pipeline};
pub use crate::ranker::TopWords;
pub use crate::trie::{NodeId, WordTrie};
