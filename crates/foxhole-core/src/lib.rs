//! Core puzzle types: bitboards, board geometry, and the move catalogue.

mod bitboard;
mod error;
mod movecat;
mod params;
mod topology;

pub use bitboard::BitBoard;
pub use error::ConfigError;
pub use movecat::{binomial, MoveCatalogue};
pub use params::{Connection, Geometry, Params, RawParams, MAX_HOLES, MAX_POISON};
pub use topology::Topology;
