pub mod empty_state;
pub mod footer;
pub mod header;
pub mod logo;
pub mod new_task_dialog;
pub mod rename_dialog;
pub mod task_list;
pub mod theme_selector;
pub mod toast;
