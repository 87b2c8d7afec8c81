//! Banner preview rendering
//!
//! Pure mapping from a settings record to the HTML block shown in the
//! admin page preview pane. Recomputed on demand; the output is small
//! enough that no caching is warranted.

use crate::settings::SettingsRecord;

/// Render the preview block for a draft record
///
/// The block's inline style carries the background color and its text
/// content is the banner message. A close affordance is appended when
/// the close button is enabled.
pub fn render_banner(settings: &SettingsRecord) -> String {
    let close = if settings.show_close_button {
        r#"<span class="banner-close" aria-label="Close">&times;</span>"#
    } else {
        ""
    };
    format!(
        r#"<div class="banner-preview" style="background: {}">{}{}</div>"#,
        escape_html(&settings.background_color),
        escape_html(&settings.banner_text),
        close,
    )
}

/// Minimal HTML escape for text and attribute positions
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FieldUpdate;

    #[test]
    fn test_render_uses_color_and_exact_text() {
        let mut settings = SettingsRecord::default();
        settings.apply(FieldUpdate::BannerText("Sale!".to_string()));
        settings.apply(FieldUpdate::BackgroundColor("#ff0000".to_string()));

        let html = render_banner(&settings);

        assert!(html.contains("background: #ff0000"));
        assert!(html.contains(">Sale!<"));
    }

    #[test]
    fn test_close_button_follows_setting() {
        let mut settings = SettingsRecord::default();
        settings.apply(FieldUpdate::ShowCloseButton(true));
        assert!(render_banner(&settings).contains("banner-close"));

        settings.apply(FieldUpdate::ShowCloseButton(false));
        assert!(!render_banner(&settings).contains("banner-close"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut settings = SettingsRecord::default();
        settings.apply(FieldUpdate::BannerText("<script>alert(1)</script>".to_string()));

        let html = render_banner(&settings);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_color_cannot_break_out_of_attribute() {
        let mut settings = SettingsRecord::default();
        settings.apply(FieldUpdate::BackgroundColor(r#""onmouseover="x"#.to_string()));

        let html = render_banner(&settings);

        assert!(html.contains("&quot;onmouseover=&quot;x"));
    }
}
