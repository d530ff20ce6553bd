//! Command handlers for the libris binary

pub mod catalog;
pub mod menu;
