// Command implementations

pub mod analyze;
pub mod health;
pub mod parse;
pub mod prompt;
