mod confirm_modal;
mod task_entry;
mod task_form;
mod task_list;

pub use confirm_modal::ConfirmModal;
pub use task_entry::TaskEntry;
pub use task_form::TaskForm;
pub use task_list::TaskList;
