// Reusable library API — everything the CLI does is driveable from here.
pub mod cancel;
pub mod errors;
pub mod generator;
pub mod letter_pool;
pub mod log;
pub mod matcher;
pub mod solver;
pub mod task;
pub mod trie;
pub mod word_list;
