use url::Url;

/// Root-relative links for pages mounted under the public URL's path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePaths {
    base: String,
}

impl SitePaths {
    pub fn from_public_url(public_url: &Url) -> Self {
        Self {
            base: public_url.path().trim_end_matches('/').to_string(),
        }
    }

    /// Mount prefix without a trailing slash; empty at the root.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn home(&self) -> &str {
        if self.base.is_empty() { "/" } else { &self.base }
    }

    pub fn play(&self) -> String {
        format!("{}/play", self.base)
    }

    pub fn asset(&self, name: &str) -> String {
        format!("{}/static/{name}", self.base)
    }
}
