//! Page rendering.

use crate::ports::Analytics;

/// Path reported to analytics for the home page.
pub const HOME_PATH: &str = "/home";

const HOME_CONTENT: &str = "<div>content</div>";

/// Renders the home page and records a page view for [`HOME_PATH`].
pub fn render_page(analytics: &dyn Analytics) -> String {
    analytics.track_page_view(HOME_PATH);
    HOME_CONTENT.to_string()
}
