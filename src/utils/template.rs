use crate::rewrite::{
    DESKTOP_MIN_WIDTH_PX, DESKTOP_VIDEO_DIR, FALLBACK_TEXT, MOBILE_VIDEO_DIR, VIDEO_MIME_TYPE,
};

/// Render the desktop + mobile `<source>` pair that replaces a single source tag.
///
/// The desktop source carries the min-width media query and comes first, so
/// browsers below the breakpoint fall through to the unconditioned mobile
/// source. Indentation matches the JSX `<video>` blocks it is spliced into.
pub fn render_responsive_sources(asset: &str) -> String {
    let breakpoint = DESKTOP_MIN_WIDTH_PX;
    let mobile_max = DESKTOP_MIN_WIDTH_PX - 1;
    format!(
        r#"{{/* Desktop/Tablet: 1080p HD (≥{breakpoint}px) */}}
          <source
            src="{DESKTOP_VIDEO_DIR}/{asset}"
            type="{VIDEO_MIME_TYPE}"
            media="(min-width: {breakpoint}px)"
          />

          {{/* Mobile: 720p optimized (≤{mobile_max}px) */}}
          <source
            src="{MOBILE_VIDEO_DIR}/{asset}"
            type="{VIDEO_MIME_TYPE}"
          />

          {FALLBACK_TEXT}"#
    )
}
