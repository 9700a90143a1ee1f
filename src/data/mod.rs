//! Rating history retrieval.

pub mod chesscom;

pub use chesscom::*;
