pub mod submit_feedback;
