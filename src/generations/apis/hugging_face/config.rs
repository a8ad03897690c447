pub const API_URL: &str = "https://router.huggingface.co/hf-inference/models";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
