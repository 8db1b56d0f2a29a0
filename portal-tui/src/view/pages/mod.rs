//! 页面

pub mod catalog;
pub mod login;
