use crate::constants::*;
use crate::dom;
use crate::markup;
use folio_core::constants::NOTIFICATION_TTL_MS;
use folio_core::contact::{ContactForm, NoticeKind, SENT_MESSAGE};
use wasm_bindgen::JsCast;
use web_sys as web;

const NOTIFICATION_SHOW_DELAY_MS: i32 = 100;
const NOTIFICATION_FADE_MS: i32 = 300;

fn field_value(form: &web::Element, name: &str) -> String {
    let Some(el) = dom::query_in(form, &format!("[name=\"{}\"]", name)) else {
        return String::new();
    };
    let value = match el.dyn_into::<web::HtmlInputElement>() {
        Ok(input) => input.value(),
        Err(el) => el
            .dyn_into::<web::HtmlTextAreaElement>()
            .map(|t| t.value())
            .unwrap_or_default(),
    };
    value.trim().to_string()
}

fn read_form(form: &web::Element) -> ContactForm {
    let [name, email, subject, message] = CONTACT_FIELDS.map(|f| field_value(form, f));
    ContactForm {
        name,
        email,
        subject,
        message,
    }
}

pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return;
    };
    let doc = document.clone();
    let this = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        match read_form(&this).validate() {
            Ok(()) => {
                notify(&doc, SENT_MESSAGE, NoticeKind::Success);
                if let Some(f) = this.dyn_ref::<web::HtmlFormElement>() {
                    f.reset();
                }
            }
            Err(e) => notify(&doc, &e.to_string(), NoticeKind::Error),
        }
    });
}

/// Slide-in toast; dismissed by its close button or after a few seconds.
pub fn notify(document: &web::Document, message: &str, kind: NoticeKind) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    el.set_class_name(&format!("notification notification-{}", kind.class()));
    el.set_inner_html(&markup::notification_html(message, kind));
    el.style().set_css_text(&format!(
        concat!(
            "position: fixed; top: 20px; right: 20px; z-index: 10000; max-width: 400px; ",
            "padding: 15px 20px; border-radius: 8px; color: white; background: {}; ",
            "box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); ",
            "transform: translateX(100%); transition: transform 0.3s ease;"
        ),
        kind.background()
    ));
    _ = body.append_child(&el);

    let shown = el.clone();
    dom::set_timeout(NOTIFICATION_SHOW_DELAY_MS, move || {
        dom::set_style(&shown, "transform", "translateX(0)");
    });

    if let Some(close) = dom::query_in(&el, NOTIFICATION_CLOSE) {
        let target = el.clone();
        dom::add_listener(&close, "click", move |_ev: web::Event| dismiss(&target));
    }
    let expiring = el.clone();
    dom::set_timeout(NOTIFICATION_TTL_MS, move || dismiss(&expiring));
}

fn dismiss(el: &web::HtmlElement) {
    if !el.is_connected() {
        return;
    }
    dom::set_style(el, "transform", "translateX(100%)");
    let el = el.clone();
    dom::set_timeout(NOTIFICATION_FADE_MS, move || el.remove());
}
