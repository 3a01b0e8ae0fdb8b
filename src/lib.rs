#![forbid(unsafe_code)]

pub mod build;
pub mod catalog;
pub mod cli;
pub mod formats;
pub mod logging;
pub mod normalize;
pub mod render;
pub mod slug;
pub mod theme;
pub mod tokenize;
