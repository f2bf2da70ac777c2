pub mod common;
pub mod feedback;
pub mod recipe;
pub mod recognition;
