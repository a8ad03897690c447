pub mod hugging_face;
pub mod inference_provider;
