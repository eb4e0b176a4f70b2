// Reusable library API — shared by the CLI binary and integration tests
pub mod candidates;
pub mod errors;
pub mod letters;
pub mod mapping;
pub mod output;
pub mod solver;
pub mod template;
pub mod trie;
pub mod word_list;

pub mod log;
