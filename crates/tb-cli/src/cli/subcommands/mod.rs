pub mod board;
pub mod task;

pub use board::BoardCommands;
pub use task::TaskCommands;
