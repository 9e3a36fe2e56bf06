//! Lint rules organized by category.

pub mod comments;
pub mod react;

// Re-export all rules
pub use comments::NoJiraTodo;
pub use react::ForbidComponentProps;
