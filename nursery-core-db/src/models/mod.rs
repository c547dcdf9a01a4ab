pub mod admin;
pub mod identifiable;
pub mod holding;
pub mod product_control;

// Re-exports
pub use admin::*;
pub use identifiable::*;
pub use holding::*;
pub use product_control::*;
