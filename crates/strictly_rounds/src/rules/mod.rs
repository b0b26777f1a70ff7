//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The board's own query
//! methods delegate here so the rules can be tested on their own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{has_line, winning_line, LINES};
