//! Paged item markup and pagination controls.

use wrapped_core::{PageLayout, WrappedResult};
use wrapped_domain::CardInstanceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedMarkup {
    pub pages_html: String,
    pub layout: PageLayout,
}

/// Render `items` as consecutive `items-page` containers of at most
/// `page_size` items. Only page 0 starts visible.
///
/// `render_item` receives the item, its global index across all pages and its
/// index within the page.
pub fn paginate<T, F>(
    items: &[T],
    page_size: usize,
    mut render_item: F,
) -> WrappedResult<PagedMarkup>
where
    F: FnMut(&T, usize, usize) -> String,
{
    let layout = PageLayout::new(items.len(), page_size)?;
    let mut pages_html = String::new();

    for (page, chunk) in layout.chunks(items).into_iter().enumerate() {
        let info = layout.page_info(page);
        let items_html: String = chunk
            .iter()
            .enumerate()
            .map(|(local, item)| render_item(item, info.range.start + local, local))
            .collect();

        let (class, display) = if info.has_prev {
            ("items-page", "none")
        } else {
            ("items-page active", "flex")
        };
        pages_html.push_str(&format!(
            r#"<div class="{class}" data-page="{page}" style="display: {display};">{items_html}</div>"#
        ));
    }

    Ok(PagedMarkup { pages_html, layout })
}

/// Prev/indicator/next controls. Empty when there is nothing to page through.
pub fn pagination_controls(card_id: &CardInstanceId, total_pages: usize) -> String {
    if total_pages <= 1 {
        return String::new();
    }

    format!(
        concat!(
            r#"<div class="pagination-controls" data-card-id="{id}">"#,
            r#"<button class="pagination-button pagination-prev" data-card-id="{id}" "#,
            r#"data-direction="prev" style="display: none;" aria-label="Previous page">"#,
            r#"Prev</button>"#,
            r#"<span class="page-indicator" data-card-id="{id}">1 / {total}</span>"#,
            r#"<button class="pagination-button pagination-next" data-card-id="{id}" "#,
            r#"data-direction="next" aria-label="Next page">Next</button>"#,
            r#"</div>"#
        ),
        id = card_id,
        total = total_pages
    )
}
