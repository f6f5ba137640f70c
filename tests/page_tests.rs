// Host-side tests for the smaller page behaviours: theme, contact form,
// counters, visibility edges and nav flags.

use folio_core::contact::{ContactError, ContactForm, NoticeKind};
use folio_core::counter::{parse_stat, Counter};
use folio_core::nav::{anchor_scroll_top, current_section, MenuState, NavFlags};
use folio_core::theme::{load_theme, toggle_theme, Theme, ThemeStore};
use folio_core::visibility::{reveal_delay_ms, ObserveMode, VisibilityChange, VisibilityTracker};

#[derive(Default)]
struct MemoryStore(Option<String>);

impl ThemeStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.0.clone()
    }

    fn write(&mut self, value: &str) {
        self.0 = Some(value.to_string());
    }
}

#[test]
fn theme_defaults_to_light_and_persists_toggles() {
    let mut store = MemoryStore::default();
    assert_eq!(load_theme(&store), Theme::Light);

    let t = toggle_theme(Theme::Light, &mut store);
    assert_eq!(t, Theme::Dark);
    assert_eq!(store.0.as_deref(), Some("dark"));
    assert_eq!(load_theme(&store), Theme::Dark);

    let t = toggle_theme(t, &mut store);
    assert!(!t.is_dark());
    assert_eq!(store.0.as_deref(), Some("light"));
}

#[test]
fn garbage_theme_value_falls_back_to_light() {
    let store = MemoryStore(Some("sepia".into()));
    assert_eq!(load_theme(&store), Theme::Light);
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
}

fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.into(),
        email: email.into(),
        subject: subject.into(),
        message: message.into(),
    }
}

#[test]
fn contact_form_validation() {
    assert_eq!(form("Ana", "ana@example.com", "Hi", "Hello").validate(), Ok(()));
    assert_eq!(
        form("", "ana@example.com", "Hi", "Hello").validate(),
        Err(ContactError::MissingField)
    );
    assert_eq!(
        form("Ana", "ana.example.com", "Hi", "Hello").validate(),
        Err(ContactError::InvalidEmail)
    );
    assert_eq!(
        ContactError::MissingField.to_string(),
        "Please fill in all fields"
    );
}

#[test]
fn notice_kinds_have_distinct_styling() {
    let kinds = [NoticeKind::Success, NoticeKind::Error, NoticeKind::Info];
    for (i, a) in kinds.iter().enumerate() {
        for b in &kinds[i + 1..] {
            assert_ne!(a.class(), b.class());
            assert_ne!(a.background(), b.background());
        }
    }
}

#[test]
fn counter_counts_up_to_target() {
    let mut c = Counter::with_duration(50, 160.0, 0.0);
    assert_eq!(c.sample(0.0).as_deref(), Some("0+"));
    assert_eq!(c.sample(10.0), None, "same step, same label");
    assert_eq!(c.sample(16.0).as_deref(), Some("5+"));
    assert_eq!(c.sample(80.0).as_deref(), Some("25+"));
    assert_eq!(c.sample(159.0).as_deref(), Some("45+"));
    assert!(!c.is_done());
    assert_eq!(c.sample(160.0).as_deref(), Some("50+"));
    assert!(c.is_done());
    assert_eq!(c.sample(500.0), None);
}

#[test]
fn counter_takes_two_seconds_at_any_refresh_rate() {
    for hz in [60.0, 144.0] {
        let mut c = Counter::new(12, 1000.0);
        let mut now = 1000.0;
        while !c.is_done() {
            now += 1000.0 / hz;
            c.sample(now);
        }
        let took = now - 1000.0;
        assert!(
            (2000.0..2000.0 + 1000.0 / hz + 1e-6).contains(&took),
            "{hz} Hz took {took} ms"
        );
    }
}

#[test]
fn counter_holds_at_zero_before_its_start() {
    let mut c = Counter::new(30, 500.0);
    assert_eq!(c.sample(100.0).as_deref(), Some("0+"));
    assert_eq!(c.sample(400.0), None);
}

#[test]
fn stat_labels_parse_leading_number() {
    assert_eq!(parse_stat("25+"), Some(25));
    assert_eq!(parse_stat(" 8 years"), Some(8));
    assert_eq!(parse_stat("many"), None);
}

#[test]
fn once_tracker_reports_first_entry_only() {
    let mut t = VisibilityTracker::new(ObserveMode::Once);
    assert_eq!(t.update(false), None);
    assert_eq!(t.update(true), Some(VisibilityChange::Entered));
    assert!(t.is_done());
    assert_eq!(t.update(false), None);
    assert_eq!(t.update(true), None);
}

#[test]
fn continuous_tracker_reports_both_edges() {
    let mut t = VisibilityTracker::new(ObserveMode::Continuous);
    assert_eq!(t.update(true), Some(VisibilityChange::Entered));
    assert_eq!(t.update(true), None);
    assert_eq!(t.update(false), Some(VisibilityChange::Left));
    assert!(!t.is_visible());
    assert_eq!(t.update(true), Some(VisibilityChange::Entered));
    assert!(!t.is_done());
}

#[test]
fn reveal_delays_are_staggered() {
    assert_eq!(reveal_delay_ms(0, 100.0), 0.0);
    assert_eq!(reveal_delay_ms(3, 100.0), 300.0);
}

#[test]
fn nav_flags_follow_scroll_thresholds() {
    assert_eq!(NavFlags::at(0.0), NavFlags::default());
    assert_eq!(
        NavFlags::at(51.0),
        NavFlags {
            scrolled: true,
            back_to_top: false,
        }
    );
    let deep = NavFlags::at(501.0);
    assert!(deep.scrolled && deep.back_to_top);
    assert!(!NavFlags::at(50.0).scrolled);
}

#[test]
fn anchor_scroll_clears_the_nav_bar() {
    assert_eq!(anchor_scroll_top(900.0), 800.0);
    assert_eq!(anchor_scroll_top(40.0), 0.0);
}

#[test]
fn current_section_tracks_scroll_position() {
    let sections = [("hero", 0.0), ("about", 800.0), ("portfolio", 1600.0)];
    assert_eq!(current_section(0.0, &sections), Some("hero"));
    assert_eq!(current_section(599.0, &sections), Some("hero"));
    assert_eq!(current_section(600.0, &sections), Some("about"));
    assert_eq!(current_section(5000.0, &sections), Some("portfolio"));
    assert_eq!(current_section(0.0, &[("late", 900.0)]), None);
    assert_eq!(current_section(0.0, &[]), None);
}

#[test]
fn menu_closes_once() {
    let mut menu = MenuState::default();
    assert!(!menu.close());
    assert!(menu.toggle());
    assert!(menu.is_open());
    assert!(menu.close());
    assert!(!menu.is_open());
    assert!(!menu.close());
}
