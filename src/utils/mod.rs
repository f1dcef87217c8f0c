//! Utility modules for moodlist

pub mod filesystem;
