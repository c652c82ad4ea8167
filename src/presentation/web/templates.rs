use askama::Template;

use super::paths::SitePaths;
use super::views::{PlayView, ShareLinkView};

pub const COMPOSE_SUBTITLE: &str = "Share a Spotify track with a heartfelt note. Your friend sees your message, then listens instantly, and they can scan the Spotify code to open the song in their app!";
pub const SHARED_SUBTITLE: &str = "Someone's thinking of you and sent you this track and note! Share a Spotify track with a heartfelt note.";

#[derive(Template)]
#[template(path = "pages/compose.html")]
pub struct ComposeTemplate {
    pub version: &'static str,
    pub paths: SitePaths,
    pub subtitle: &'static str,
    pub track: String,
    pub note: String,
    pub error: Option<String>,
    pub link: Option<ShareLinkView>,
}

impl ComposeTemplate {
    pub fn empty(paths: SitePaths) -> Self {
        Self {
            version: crate::VERSION,
            paths,
            subtitle: COMPOSE_SUBTITLE,
            track: String::new(),
            note: String::new(),
            error: None,
            link: None,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/play.html")]
pub struct PlayTemplate {
    pub version: &'static str,
    pub paths: SitePaths,
    pub subtitle: &'static str,
    pub play: PlayView,
}

#[derive(Template)]
#[template(path = "pages/missing.html")]
pub struct MissingShareTemplate {
    pub version: &'static str,
    pub paths: SitePaths,
    pub headline: String,
    pub detail: String,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}
