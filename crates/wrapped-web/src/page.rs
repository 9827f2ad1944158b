//! Standalone HTML document around the rendered slides.

use wrapped_core::{WrappedConfig, WrappedError, WrappedResult};

use crate::carousel::CarouselConfig;
use crate::markup::escape_html;
use crate::renderer::RenderedSlide;

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOptions {
    pub title: String,
    pub carousel: CarouselConfig,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self::from_config(&WrappedConfig::default())
    }
}

impl DocumentOptions {
    pub fn from_config(config: &WrappedConfig) -> Self {
        Self {
            title: config.effective_page_title().to_string(),
            carousel: CarouselConfig::from_config(config),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
        }
    }
}

pub fn render_document(
    slides: &[RenderedSlide],
    options: &DocumentOptions,
) -> WrappedResult<String> {
    let carousel_json = serde_json::to_string(&options.carousel)
        .map_err(|e| WrappedError::Serialization(e.to_string()))?
        // Keep the JSON from closing its <script> element.
        .replace("</", "<\\/");

    let stylesheets: String = options
        .stylesheets
        .iter()
        .map(|href| format!(r#"<link rel="stylesheet" href="{}">"#, escape_html(href)))
        .collect();
    let scripts: String = options
        .scripts
        .iter()
        .map(|src| format!(r#"<script src="{}"></script>"#, escape_html(src)))
        .collect();
    let slides_html: String = slides.iter().map(|slide| slide.markup.as_str()).collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{stylesheets}
</head>
<body>
<div class="swiper" id="wrappedSwiper">
<div class="swiper-wrapper" id="swiperWrapper">{slides_html}</div>
</div>
<button class="back-to-top" id="backToTop" style="display: none;" aria-label="Back to start">Back to start</button>
<script type="application/json" id="carouselConfig">{carousel_json}</script>
{scripts}
</body>
</html>
"#,
        title = escape_html(&options.title),
    ))
}
