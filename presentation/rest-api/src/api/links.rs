use business::domain::shared::pagination::Page;
use poem::http::Uri;
use url::Url;

/// Builds absolute URLs from the configured public base URL.
#[derive(Debug, Clone)]
pub struct Links {
    base: Url,
}

impl Links {
    pub fn new(public_url: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(public_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    /// Public URL of a stored media file.
    pub fn media(&self, path: &str) -> String {
        self.base
            .join("media/")
            .and_then(|media| media.join(path.trim_start_matches('/')))
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("/media/{}", path))
    }

    /// The request URL with its `page` parameter set to `page`. Every other
    /// parameter is kept in its original order.
    pub fn with_page(&self, uri: &Uri, page: u32) -> Option<String> {
        let mut url = self.base.join(uri.path().trim_start_matches('/')).ok()?;
        let kept: Vec<(String, String)> =
            url::form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
                .filter(|(key, _)| key != "page")
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("page", &page.to_string());
        Some(url.to_string())
    }

    /// `(next, previous)` links for a result page.
    pub fn neighbours<T>(&self, uri: &Uri, page: &Page<T>) -> (Option<String>, Option<String>) {
        let current = page.request.page();
        let next = page
            .has_next()
            .then(|| self.with_page(uri, current + 1))
            .flatten();
        let previous = page
            .has_previous()
            .then(|| self.with_page(uri, current - 1))
            .flatten();
        (next, previous)
    }
}
