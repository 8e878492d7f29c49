mod task;

pub use task::Task;
