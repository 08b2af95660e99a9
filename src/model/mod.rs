//! Pure data structures shared by every controller: [`Item`], [`Status`], [`Color`].

pub mod item;

pub use item::*;
