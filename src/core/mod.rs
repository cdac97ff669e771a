//! Package operations and the plumbing they share.

pub mod filter;
pub mod index;
pub mod installer;
pub mod inventory;
pub mod runner;
