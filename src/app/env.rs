use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    /// Public URL of this deployment, embedded in every share link.
    pub app_url: String,

    pub hf_api_key: String,
    pub inference_api_url: Option<String>,
    pub inference_timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::Envy;

    #[test]
    fn reads_required_and_optional_keys() {
        let vars = vec![
            ("APP_ENV".to_string(), "test".to_string()),
            ("APP_URL".to_string(), "https://canvas.example".to_string()),
            ("HF_API_KEY".to_string(), "hf_secret".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ];

        let envy: Envy = envy::from_iter(vars).unwrap();

        assert_eq!(envy.app_url, "https://canvas.example");
        assert_eq!(envy.port, Some(8080));
        assert_eq!(envy.inference_api_url, None);
        assert_eq!(envy.inference_timeout_secs, None);
    }

    #[test]
    fn missing_app_url_is_an_error() {
        let vars = vec![
            ("APP_ENV".to_string(), "test".to_string()),
            ("HF_API_KEY".to_string(), "hf_secret".to_string()),
        ];

        assert!(envy::from_iter::<_, Envy>(vars).is_err());
    }
}
