pub mod clipboard;
pub mod os;
