mod core;
mod steps;

pub use core::{ObjectStatus, Orchestrator};
pub use steps::Toolchain;
pub use test::TestOptions;
