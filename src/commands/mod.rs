pub mod analyze;
pub mod history;
pub mod login;
pub mod settings;
