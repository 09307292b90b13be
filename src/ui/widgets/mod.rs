// src/ui/widgets/mod.rs

pub mod footer;
pub mod header;
pub mod results;
pub mod tabs;
pub mod thank_you;
pub mod vote_form;
