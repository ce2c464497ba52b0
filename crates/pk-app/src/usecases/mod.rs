pub mod chain;
pub mod clipboard;
