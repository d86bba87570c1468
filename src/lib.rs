//! Canonical grid construction for a tile-matching puzzle solver.
//!
//! Turns a board described explicitly, generated pseudo-randomly, or
//! recognized from a screenshot into one bounds-safe [`Table`] of
//! [`Point`]s with a shared EMPTY-sentinel encoding. The matching solver
//! that consumes the grid lives elsewhere.

pub mod board_image;
pub mod builder;
pub mod config;
pub mod point;
pub mod random;
pub mod session;
pub mod table;

pub use board_image::{BoardImage, CellIndex, Rect};
pub use builder::{BoardSource, BuildError, build};
pub use config::BoardConfig;
pub use point::{EMPTY, Point, TypeCode};
pub use session::{BoardSession, SessionError};
pub use table::{GridError, Table};
