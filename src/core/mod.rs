// src/core/mod.rs

/// Options table, tabs, submissions and the results snapshot types.
pub mod models;

/// The interaction state record and its pure transitions.
pub mod survey;

/// Fixed sample data shown on the results tab.
pub mod results;
