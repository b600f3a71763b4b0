//! Translate mutations.

pub mod insert;
