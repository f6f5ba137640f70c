// Host-side tests for the gallery HTML fragments.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod markup {
    include!("../src/markup.rs");
}

use folio_core::contact::NoticeKind;
use folio_core::GalleryItem;
use markup::*;

fn item() -> GalleryItem {
    GalleryItem {
        id: 7,
        title: "Tom & Jerry <3".into(),
        description: "A \"quoted\" project".into(),
        category: "backgrounds".into(),
        thumbnail: "thumbs/7.webp".into(),
        image: "full/7.webp".into(),
        live_demo_url: None,
        technologies: vec!["HTML".into(), "<script>".into()],
    }
}

#[test]
fn escape_covers_html_specials() {
    assert_eq!(
        escape_html(r#"<a href="x">'&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn category_label_capitalises_first_letter() {
    assert_eq!(category_label("websites"), "Websites");
    assert_eq!(category_label(""), "");
}

#[test]
fn card_carries_id_and_escaped_text() {
    let html = card_html(&item());
    assert!(html.starts_with(r#"<div class="portfolio-item" data-id="7""#));
    assert!(html.contains(r#"data-category="backgrounds""#));
    assert!(html.contains(r#"src="thumbs/7.webp""#));
    assert!(html.contains("Tom &amp; Jerry &lt;3"));
    assert!(html.contains("<p>Backgrounds</p>"));
    assert!(!html.contains("<3"));
}

#[test]
fn cards_concatenate_in_order() {
    let mut second = item();
    second.id = 8;
    let items = [item(), second];
    let html = cards_html(items.iter());
    let first_at = html.find(r#"data-id="7""#).unwrap();
    let second_at = html.find(r#"data-id="8""#).unwrap();
    assert!(first_at < second_at);
    assert_eq!(html.matches(r#"class="portfolio-item""#).count(), 2);
}

#[test]
fn empty_state_message() {
    assert!(empty_html().contains("No items found"));
}

#[test]
fn tech_tags_are_escaped_spans() {
    let html = tech_tags_html(&item().technologies);
    assert_eq!(
        html,
        r#"<span class="tech-tag">HTML</span><span class="tech-tag">&lt;script&gt;</span>"#
    );
    assert_eq!(tech_tags_html(&[]), "");
}

#[test]
fn notification_has_icon_message_and_close() {
    let html = notification_html("Saved <ok>", NoticeKind::Success);
    assert!(html.contains("fa-check-circle"));
    assert!(html.contains("Saved &lt;ok&gt;"));
    assert!(html.contains(r#"class="notification-close""#));
}
