pub mod board;
pub mod demo;

pub use board::{build_ranking_list, current_ranking_list};
pub use demo::build_demo_ranking;
