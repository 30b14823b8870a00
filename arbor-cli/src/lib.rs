//! Support library for the arbor CLI binary.
//!
//! Re-exports the CLI modules so doctests and integration tests can exercise
//! the command pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
pub mod wire;
