// Instruction handlers and account contexts

pub mod config;
pub mod delegation;
pub mod initialize;
pub mod swap;

pub use config::*;
pub use delegation::*;
pub use initialize::*;
pub use swap::*;
