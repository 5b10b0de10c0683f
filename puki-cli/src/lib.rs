//! Pieces of the `pukiwiki2hugo` binary that are worth testing without a
//! process boundary.

pub mod inspect;
