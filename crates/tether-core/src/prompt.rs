pub const CONFIRM_DELETE_TASK: &str = "Are you sure you want to delete this task?";
pub const CONFIRM_CLEAR_COMPLETED: &str = "Delete all completed tasks?";

/// Blocking yes/no questions and notices shown to the user.
pub trait Prompter {
    fn confirm(&self, message: &str) -> bool;

    fn notify(&self, message: &str);
}
