//! Build-time popup configuration

use crate::error::Result;
use url::Url;

/// Backend used when `YT_INSIGHTS_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Number of predictions listed in the top comments section
pub const TOP_COMMENT_LIMIT: usize = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct PopupConfig {
    pub api_url: Url,
    pub top_comment_limit: usize,
}

impl PopupConfig {
    /// Read the backend address baked in at compile time
    pub fn from_build_env() -> Result<Self> {
        Self::with_api_url(option_env!("YT_INSIGHTS_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_api_url(api_url: &str) -> Result<Self> {
        // A trailing slash keeps `join` from dropping the last path segment
        let mut base = api_url.trim().trim_end_matches('/').to_string();
        base.push('/');

        Ok(Self {
            api_url: Url::parse(&base)?,
            top_comment_limit: TOP_COMMENT_LIMIT,
        })
    }

    /// Resolve an endpoint path such as `fetch_comments` against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.api_url.join(path.trim_start_matches('/'))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = PopupConfig::with_api_url(DEFAULT_API_URL).unwrap();

        assert_eq!(
            config.endpoint("fetch_comments").unwrap().as_str(),
            "http://127.0.0.1:5000/fetch_comments"
        );
        assert_eq!(config.top_comment_limit, 25);
    }

    #[test]
    fn test_endpoint_under_path_prefix() {
        let config = PopupConfig::with_api_url("https://api.example.com/v1/").unwrap();

        assert_eq!(
            config.endpoint("/generate_chart").unwrap().as_str(),
            "https://api.example.com/v1/generate_chart"
        );
    }

    #[test]
    fn test_invalid_api_url() {
        assert!(PopupConfig::with_api_url("not a url").is_err());
    }

    #[test]
    fn test_from_build_env() {
        assert!(PopupConfig::from_build_env().is_ok());
    }
}
