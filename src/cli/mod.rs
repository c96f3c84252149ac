//! CLI command handlers

pub mod export;
pub mod registration;

pub use export::handle_export_command;
pub use registration::{
    handle_add_command, handle_delete_command, handle_list_command, handle_years_command,
    StdinConfirmation,
};
