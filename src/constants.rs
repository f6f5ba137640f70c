// DOM contract: selectors and class names the front-end reads and writes.

// Cursor followers
pub const CURSOR_DOT: &str = ".cursor-dot";
pub const CURSOR_OUTLINE: &str = ".cursor-outline";
pub const INTERACTIVE: &str =
    "a, button, .portfolio-item, .filter-btn, input, textarea, .modal-image, .social-icon";

// Hero
pub const HERO_SECTION_ID: &str = "hero";
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const HERO_TITLE: &str = ".title-name";
pub const HERO_SHAPES: &str = ".shape";
pub const HERO_BACKGROUND: &str = ".hero-background";
pub const TYPING_CARET_CLASS: &str = "typing-caret";

// Gallery
pub const GALLERY_GRID: &str = ".portfolio-grid";
pub const GALLERY_CARD: &str = ".portfolio-item";
pub const FILTER_BUTTON: &str = ".filter-btn";
pub const FILTER_ATTR: &str = "data-filter";
pub const CARD_ID_ATTR: &str = "data-id";
pub const MODAL: &str = ".portfolio-modal";
pub const MODAL_IMAGE: &str = ".modal-image";
pub const MODAL_TITLE: &str = ".modal-title";
pub const MODAL_DESCRIPTION: &str = ".modal-description";
pub const MODAL_CATEGORY: &str = ".modal-category";
pub const MODAL_TECH: &str = ".modal-tech";
pub const MODAL_LIVE: &str = ".modal-live";
pub const MODAL_PREV: &str = ".modal-prev";
pub const MODAL_NEXT: &str = ".modal-next";
pub const MODAL_CLOSE: &str = ".close-modal";
pub const MODAL_FADE_OFFSET_PX: f32 = 20.0;

// Shared state classes
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const LOADING_CLASS: &str = "loading";

// Reveal / lazy sections
pub const REVEAL_TARGETS: &str = ".skill-item, .project-card, .education-card, .timeline-item, .stat, .about-text, .contact-info, .contact-form";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const LAZY_SECTIONS: &str = "section:not(#hero)";
pub const LAZY_ROOT_MARGIN: &str = "200px";
pub const LAZY_THRESHOLD: f64 = 0.01;
pub const EXPERIENCE_SECTION_ID: &str = "experience";
pub const TIMELINE_ITEM: &str = ".timeline-item";
pub const STATS_BLOCK: &str = ".about-stats";
pub const STAT_NUMBER: &str = ".stat h4";
pub const STATS_THRESHOLD: f64 = 0.5;

// Navigation chrome
pub const NAV: &str = ".main-nav";
pub const NAV_SCROLLED_CLASS: &str = "nav-scrolled";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV_ACTIVE_CLASS: &str = "nav-active";
pub const MENU_TOGGLE: &str = ".menu-toggle";
pub const MENU_OPEN_CLASS: &str = "menu-open";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const NAV_SECTION_LINKS: &str = ".nav-links a[href^=\"#\"]";
pub const PAGE_SECTIONS: &str = "section[id]";

// Theme and contact
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];
pub const NOTIFICATION_CLOSE: &str = ".notification-close";
