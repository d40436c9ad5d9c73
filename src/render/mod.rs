//! Autogenerated block rendering

pub mod dockerfile;

pub use dockerfile::{env_name, render_block, BLOCK_BEGIN, BLOCK_END};
