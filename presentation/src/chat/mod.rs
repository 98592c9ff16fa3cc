//! Session drivers
//!
//! Every driver runs turns strictly one after another through [`run_turn`].

mod batch;
mod repl;
mod turn;

pub use batch::{BatchRunner, sample_queries};
pub use repl::{ChatRepl, is_exit_command};
pub use turn::run_turn;
