pub const APP_NAME: &str = "AI Image Generator";
