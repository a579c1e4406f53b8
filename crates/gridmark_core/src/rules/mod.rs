//! Game rules for gridmark.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the controller and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Direction, check_win, run_length, winner};
