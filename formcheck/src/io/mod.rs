//! File I/O for formcheck commands.

pub mod config;
pub mod form_store;
pub mod init;
