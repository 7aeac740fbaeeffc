//! Best-score tracking

pub mod board;

pub use board::{ScoreBoard, ScoreKind};
