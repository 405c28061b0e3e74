// Handler modules
pub mod eval;
pub mod normalize;

// Re-export all handler functions
pub use eval::{evaluate, handle_eval, render};
pub use normalize::handle_normalize;
