pub mod logging_repository;

pub use logging_repository::LoggingFeedbackRepository;
