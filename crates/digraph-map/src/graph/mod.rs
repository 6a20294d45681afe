//! Core graph map types and operations.
//!
//! This module defines:
//! - [`DirectedGraphMap`]: the forward/reverse edge index
//! - [`Iter`] and [`IntoIter`]: edge iterators
//!
//! Serde support and the derived-view cache live in private submodules.

mod iter;
mod map;
mod serialize;
mod views;

pub use iter::{IntoIter, Iter};
pub use map::DirectedGraphMap;
