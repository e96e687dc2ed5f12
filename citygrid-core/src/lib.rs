//! Core library for generating Manhattan-style street grid seed scripts
//!
//! A grid is a rectangular lattice of street nodes joined by straight
//! street segments along the two cardinal axes. The library turns a set of
//! grid parameters into a stream of nodes and streets and renders them as a
//! SQL script suitable for seeding a `streetnodes`/`streets` database.

pub mod error;
pub mod grid;
pub mod model;
pub mod sql;

pub use error::Error;
pub use grid::{GridConfig, GridElement, GridIter};
pub use model::{Street, StreetNode};
pub use sql::write_script;

/// Sequential identifier of a street node, assigned from 1 in generation order
pub type StreetNodeId = i64;

/// Sequential identifier of a street segment, counted independently of node ids
pub type StreetId = i64;
