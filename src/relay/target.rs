//! Target URL construction.

use url::form_urlencoded;

use crate::config::UpstreamConfig;

/// Builds the outbound URL from the fixed upstream parameters and a caller's code.
#[derive(Debug, Clone)]
pub struct TargetUrl {
    base_url: String,
    act: String,
    user: String,
}

impl TargetUrl {
    pub fn new(base_url: impl Into<String>, act: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            act: act.into(),
            user: user.into(),
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(&config.base_url, &config.act, &config.user)
    }

    /// `<base>?act=<act>&user=<user>&code=<code>`, every value percent-encoded.
    pub fn build(&self, code: &str) -> String {
        format!(
            "{}?act={}&user={}&code={}",
            self.base_url,
            encode_component(&self.act),
            encode_component(&self.user),
            encode_component(code)
        )
    }
}

/// Percent-encode a query value, spaces as `%20` rather than `+`.
fn encode_component(value: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so any '+' left is a space.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
