pub mod text_utils;

pub use text_utils::{is_identifier_character, split_qualified};
