use std::path::PathBuf;

/// Where uploaded recipe images are written and served from.
pub struct MediaConfig {
    pub root: PathBuf,
}

impl MediaConfig {
    pub fn from_env() -> Self {
        let root = std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".to_string());
        Self { root: root.into() }
    }
}
