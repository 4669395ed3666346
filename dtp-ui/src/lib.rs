//! Dioxus date picker components.
//!
//! This crate provides:
//! - `state`: picker state shared with child components through Dioxus context
//! - `theme`: style config resolved into CSS variables and cell classes
//! - `components`: the `DateTimePicker` and the pieces it is built from

pub mod components;
pub mod state;
pub mod theme;

pub use components::DateTimePicker;
