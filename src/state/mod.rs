//! Per-invocation state types.

mod invocation;

pub use invocation::{Command, Flags, Invocation};
