pub mod feedback;
pub mod llm;
pub mod recognition;
