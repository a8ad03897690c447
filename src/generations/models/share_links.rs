use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

// Everything but unreserved characters and '/' is escaped.
const SHARE_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub whatsapp: String,
}

impl ShareLinks {
    /// `app_url` is inserted as is; only the message text is encoded.
    pub fn new(prompt: &str, app_url: &str) -> Self {
        let message = format!(
            "Check out this AI-generated image I created! 🎨\nPrompt: {}\n",
            prompt
        );
        let text = utf8_percent_encode(&message, SHARE_TEXT).to_string();

        Self {
            twitter: format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                text, app_url
            ),
            facebook: format!("https://www.facebook.com/sharer/sharer.php?u={}", app_url),
            linkedin: format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                app_url
            ),
            whatsapp: format!("https://api.whatsapp.com/send?text={}%20{}", text, app_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ShareLinks;

    const APP_URL: &str = "https://example.com";

    #[test]
    fn twitter_link_encodes_prompt_and_ends_with_app_url() {
        let links = ShareLinks::new("cat", APP_URL);

        assert!(links
            .twitter
            .starts_with("https://twitter.com/intent/tweet?text="));
        assert!(links.twitter.contains("Prompt%3A%20cat%0A"));
        assert!(links.twitter.ends_with("&url=https://example.com"));
    }

    #[test]
    fn message_text_is_fully_escaped() {
        let links = ShareLinks::new("a & b = c?", APP_URL);

        assert!(links
            .twitter
            .contains("Check%20out%20this%20AI-generated%20image%20I%20created%21%20%F0%9F%8E%A8%0A"));
        assert!(links.twitter.contains("a%20%26%20b%20%3D%20c%3F"));
        assert_eq!(links.twitter.matches('&').count(), 1);
    }

    #[test]
    fn facebook_and_linkedin_only_carry_app_url() {
        let links = ShareLinks::new("cat", APP_URL);

        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https://example.com"
        );
        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/sharing/share-offsite/?url=https://example.com"
        );
    }

    #[test]
    fn whatsapp_link_appends_app_url_to_text() {
        let links = ShareLinks::new("cat", APP_URL);

        assert!(links
            .whatsapp
            .starts_with("https://api.whatsapp.com/send?text=Check%20out"));
        assert!(links.whatsapp.ends_with("cat%0A%20https://example.com"));
    }

    #[test]
    fn same_input_gives_same_links() {
        assert_eq!(ShareLinks::new("cat", APP_URL), ShareLinks::new("cat", APP_URL));
    }
}
