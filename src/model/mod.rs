pub mod task;

pub use task::{now_stamp, sort_newest_first, NewTask, Task};
