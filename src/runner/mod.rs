//! Flow execution and recovery.

pub mod flow;
pub mod recovery;

pub use flow::{Flow, FlowStats, RunReport};
pub use recovery::{prompt_recovery, RecoveryAction};
