//! Core library functions for moodlist

pub mod navigation;

pub use navigation::{render, View, ViewQuery};
