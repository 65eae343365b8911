//! Chess rules engine: state model, legal move generation, terminal
//! detection, and notation. Everything here is synchronous and pure;
//! transitions take an explicit position and return a new one.

pub mod board;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod san;
pub mod types;
pub mod zobrist;

pub use board::*;
pub use fen::to_fen;
pub use game::{Game, MoveError};
pub use movegen::*;
pub use perft::perft;
pub use rules::{DrawKind, GameStatus, game_status};
pub use san::to_san;
pub use types::*;
pub use zobrist::ZOBRIST;
