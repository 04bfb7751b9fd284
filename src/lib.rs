pub mod commands;
pub mod rewrite;
pub mod utils;
