pub mod placeholder;
pub mod story;
