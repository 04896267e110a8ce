pub mod augment;
pub mod cover;
pub mod error;
pub mod reduce;
pub mod solver;
pub mod types;
