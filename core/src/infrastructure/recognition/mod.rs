pub mod clarifai_client;

pub use clarifai_client::ClarifaiRecognitionClient;
