pub mod mapping;
pub mod template;
