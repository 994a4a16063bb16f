//! HTML view models and rendering.
//!
//! The presentation layer is deliberately small: views are plain structs
//! shaped from fetched and derived data, rendered to inline HTML strings
//! that the handlers wrap in `axum::response::Html`.

use crate::classify::{self, Element, FeatureTotals};

/// View model for the result page.
#[derive(Debug, Clone, PartialEq)]
pub struct BendingView {
    pub dance: i64,
    pub instrumental: i64,
    pub acoustic: i64,
    pub energy: i64,
    pub element: &'static str,
    pub style: &'static str,
    pub user_name: String,
    pub artists: Vec<String>,
}

impl BendingView {
    /// Shapes the raw aggregates and fetched data into the display model.
    ///
    /// Feature sums are truncated toward zero here and only here; the
    /// element passed in was classified on the raw sums.
    pub fn build(
        totals: &FeatureTotals,
        element: Element,
        user_name: String,
        artists: Vec<String>,
    ) -> Self {
        BendingView {
            dance: classify::trunc(totals.dance),
            instrumental: classify::trunc(totals.instrumental),
            acoustic: classify::trunc(totals.acoustic),
            energy: classify::trunc(totals.energy),
            element: element.name(),
            style: element.style(),
            user_name,
            artists,
        }
    }

    /// Renders the result page.
    pub fn render(&self) -> String {
        let artists = self
            .artists
            .iter()
            .map(|name| format!("    <li>{}</li>\n", name))
            .collect::<String>();

        format!(
            "<!DOCTYPE html>\n<html>\n<head><title>Bendify</title></head>\n<body>\n\
             <h1>{user_name}, you are a {style}!</h1>\n\
             <p>Your element is <strong>{element}</strong>.</p>\n\
             <ul>\n\
             <li>Danceability: {dance}</li>\n\
             <li>Acousticness: {acoustic}</li>\n\
             <li>Instrumentalness: {instrumental}</li>\n\
             <li>Energy: {energy}</li>\n\
             </ul>\n\
             <h2>Your top artists</h2>\n<ol>\n{artists}</ol>\n\
             </body>\n</html>\n",
            user_name = self.user_name,
            style = self.style,
            element = self.element,
            dance = self.dance,
            acoustic = self.acoustic,
            instrumental = self.instrumental,
            energy = self.energy,
            artists = artists,
        )
    }
}

/// Renders the landing page.
pub fn render_index() -> String {
    "<!DOCTYPE html>\n<html>\n<head><title>Bendify</title></head>\n<body>\n\
     <h1>Bendify</h1>\n\
     <p>Find out which bending element matches your listening habits.</p>\n\
     <p><a href=\"/login\">Log in with Spotify</a></p>\n\
     </body>\n</html>\n"
        .to_string()
}

/// Renders a user-facing page for an upstream API failure.
pub fn render_error(status: u16, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Bendify - error</title></head>\n<body>\n\
         <h1>Something went wrong</h1>\n\
         <p>The music service answered with status {status}.</p>\n\
         <pre>{body}</pre>\n\
         <p><a href=\"/\">Back to start</a></p>\n\
         </body>\n</html>\n",
    )
}
