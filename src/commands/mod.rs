pub mod delete;
pub mod delete_all;
pub mod exists;
pub mod get;
pub mod list;
pub mod set;
