pub mod board;
pub mod dispatch;
pub mod shared;
pub mod task;
pub mod whoami;
