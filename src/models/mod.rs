pub mod task_entry;
pub mod user;

pub use task_entry::TaskEntry;
pub use user::User;
