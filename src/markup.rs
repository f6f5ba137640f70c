// HTML fragments for the gallery grid, modal and notifications.
// Pure string building; every catalog value is escaped on the way in.

use folio_core::contact::NoticeKind;
use folio_core::GalleryItem;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// "backgrounds" -> "Backgrounds"
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn card_html(item: &GalleryItem) -> String {
    format!(
        concat!(
            r#"<div class="portfolio-item" data-id="{id}" data-category="{cat}">"#,
            r#"<div class="portfolio-image">"#,
            r#"<img src="{thumb}" alt="{title}" loading="lazy">"#,
            r#"<div class="portfolio-overlay"><h3>{title}</h3><p>{label}</p></div>"#,
            r#"</div></div>"#
        ),
        id = item.id,
        cat = escape_html(&item.category),
        thumb = escape_html(&item.thumbnail),
        title = escape_html(&item.title),
        label = escape_html(&category_label(&item.category)),
    )
}

pub fn cards_html<'a>(items: impl IntoIterator<Item = &'a GalleryItem>) -> String {
    items.into_iter().map(card_html).collect()
}

pub fn empty_html() -> &'static str {
    r#"<div class="no-items">No items found in this category.</div>"#
}

pub fn tech_tags_html(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!(r#"<span class="tech-tag">{}</span>"#, escape_html(t)))
        .collect()
}

pub fn notification_html(message: &str, kind: NoticeKind) -> String {
    format!(
        concat!(
            r#"<div class="notification-content">"#,
            r#"<i class="fas fa-{icon}"></i><span>{msg}</span>"#,
            r#"</div><button class="notification-close">&times;</button>"#
        ),
        icon = kind.icon(),
        msg = escape_html(message),
    )
}
