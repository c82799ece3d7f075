pub mod kdtree;
pub mod neighbor;
pub mod search;
