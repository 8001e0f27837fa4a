use std::collections::HashSet;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavSection {
    Home,
    AboutUs,
    TfrAcademy,
    ProTeam,
    Media,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 6] = [
        NavSection::Home,
        NavSection::AboutUs,
        NavSection::TfrAcademy,
        NavSection::ProTeam,
        NavSection::Media,
        NavSection::Contact,
    ];

    /// Element id of the section in the page.
    pub fn anchor(self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::AboutUs => "about-us",
            NavSection::TfrAcademy => "tfr-academy",
            NavSection::ProTeam => "pro-team",
            NavSection::Media => "media",
            NavSection::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::AboutUs => "About Us",
            NavSection::TfrAcademy => "TFR Academy",
            NavSection::ProTeam => "Pro Team",
            NavSection::Media => "Media",
            NavSection::Contact => "Contact",
        }
    }
}

/// Something that can bring an anchor into view. Returns false when the anchor is not rendered.
pub trait ScrollTarget {
    fn scroll_to_anchor(&self, anchor: &str) -> bool;
}

pub struct DocumentScroller;

impl ScrollTarget for DocumentScroller {
    fn scroll_to_anchor(&self, anchor: &str) -> bool {
        let element = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor));
        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

/// Scroll position and the viewport-relative tops of every reveal block, taken in one pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub viewport_height: f64,
    pub reveal_tops: Vec<(String, f64)>,
}

impl ScrollSnapshot {
    pub fn capture() -> Option<Self> {
        let window = window()?;
        let document = window.document()?;
        let offset = window.scroll_y().ok()?;
        let viewport_height = window.inner_height().ok()?.as_f64()?;

        let mut reveal_tops = Vec::new();
        if let Ok(nodes) = document.query_selector_all(".scroll-reveal") {
            for i in 0..nodes.length() {
                let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                if let Some(id) = element.get_attribute("data-reveal") {
                    reveal_tops.push((id, element.get_bounding_client_rect().top()));
                }
            }
        }

        Some(Self {
            offset,
            viewport_height,
            reveal_tops,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Navigation {
    menu_open: bool,
    compact: bool,
    revealed: HashSet<String>,
}

impl Navigation {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn compact(&self) -> bool {
        self.compact
    }

    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let compact = offset > config::COMPACT_NAV_THRESHOLD;
        let changed = compact != self.compact;
        self.compact = compact;
        changed
    }

    fn should_reveal(&self, id: &str, element_top: f64, viewport_height: f64) -> bool {
        !self.revealed.contains(id) && element_top < viewport_height - config::REVEAL_OFFSET
    }

    /// One way: once revealed, an element stays revealed.
    pub fn reveal(&mut self, id: &str, element_top: f64, viewport_height: f64) -> bool {
        if !self.should_reveal(id, element_top, viewport_height) {
            return false;
        }
        self.revealed.insert(id.to_string())
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Whether applying `snapshot` would change anything.
    pub fn would_change(&self, snapshot: &ScrollSnapshot) -> bool {
        (snapshot.offset > config::COMPACT_NAV_THRESHOLD) != self.compact
            || snapshot
                .reveal_tops
                .iter()
                .any(|(id, top)| self.should_reveal(id, *top, snapshot.viewport_height))
    }

    pub fn observe(&mut self, snapshot: &ScrollSnapshot) -> bool {
        let mut changed = self.on_scroll(snapshot.offset);
        for (id, top) in &snapshot.reveal_tops {
            changed |= self.reveal(id, *top, snapshot.viewport_height);
        }
        changed
    }
}

/// Scrolls to the section. Returns the state change to dispatch, or `None` when the
/// anchor is not rendered and nothing should change.
pub fn go_to(section: NavSection, target: &impl ScrollTarget) -> Option<NavAction> {
    if target.scroll_to_anchor(section.anchor()) {
        Some(NavAction::CloseMenu)
    } else {
        debug!("Section #{} not rendered yet", section.anchor());
        None
    }
}

#[derive(Debug, PartialEq)]
pub enum NavAction {
    CloseMenu,
    ToggleMenu,
    Observe(ScrollSnapshot),
}

impl Reducible for Navigation {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::CloseMenu if !self.menu_open => self,
            NavAction::CloseMenu => {
                let mut next = (*self).clone();
                next.close_menu();
                next.into()
            }
            NavAction::ToggleMenu => {
                let mut next = (*self).clone();
                next.toggle_menu();
                next.into()
            }
            NavAction::Observe(snapshot) if !self.would_change(&snapshot) => self,
            NavAction::Observe(snapshot) => {
                let mut next = (*self).clone();
                next.observe(&snapshot);
                next.into()
            }
        }
    }
}

pub type NavContext = UseReducerHandle<Navigation>;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeLayout {
        rendered: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakeLayout {
        fn with(rendered: &[&'static str]) -> Self {
            Self {
                rendered: rendered.to_vec(),
                scrolled_to: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollTarget for FakeLayout {
        fn scroll_to_anchor(&self, anchor: &str) -> bool {
            if self.rendered.contains(&anchor) {
                self.scrolled_to.borrow_mut().push(anchor.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn anchors_match_section_labels() {
        for section in NavSection::ALL {
            assert_eq!(
                section.anchor(),
                section.label().to_lowercase().replace(' ', "-")
            );
        }
    }

    #[test]
    fn go_to_scrolls_and_closes_menu() {
        let layout = FakeLayout::with(&["home", "contact"]);
        let mut nav = Navigation::default();
        nav.toggle_menu();

        let action = go_to(NavSection::Contact, &layout);
        assert_eq!(action, Some(NavAction::CloseMenu));
        let nav = Rc::new(nav).reduce(NavAction::CloseMenu);
        assert!(!nav.menu_open());
        assert_eq!(layout.scrolled_to.borrow().as_slice(), ["contact"]);
    }

    #[test]
    fn go_to_missing_section_changes_nothing() {
        let layout = FakeLayout::with(&["home"]);
        let mut nav = Navigation::default();
        nav.toggle_menu();
        nav.on_scroll(120.0);
        nav.reveal("about-intro", 10.0, 800.0);
        let before = nav.clone();

        assert_eq!(go_to(NavSection::Media, &layout), None);
        assert_eq!(nav, before);
        assert!(layout.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn compact_threshold_is_strict() {
        let mut nav = Navigation::default();
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.compact());
        assert!(nav.on_scroll(51.0));
        assert!(nav.compact());
        assert!(nav.on_scroll(0.0));
        assert!(!nav.compact());
    }

    #[test]
    fn reveal_requires_clearing_the_offset() {
        let mut nav = Navigation::default();
        assert!(!nav.reveal("card", 650.0, 800.0));
        assert!(!nav.is_revealed("card"));
        assert!(nav.reveal("card", 649.0, 800.0));
        assert!(nav.is_revealed("card"));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut nav = Navigation::default();
        nav.reveal("card", 100.0, 800.0);
        assert!(!nav.reveal("card", 2_000.0, 800.0));
        assert!(nav.is_revealed("card"));
    }

    #[test]
    fn observe_reports_changes_only_once() {
        let snapshot = ScrollSnapshot {
            offset: 300.0,
            viewport_height: 800.0,
            reveal_tops: vec![("a".into(), 200.0), ("b".into(), 1_500.0)],
        };
        let mut nav = Navigation::default();
        assert!(nav.observe(&snapshot));
        assert!(nav.is_revealed("a"));
        assert!(!nav.is_revealed("b"));
        assert!(!nav.observe(&snapshot));
    }

    #[test]
    fn reducer_toggles_menu() {
        let nav = Rc::new(Navigation::default());
        let opened = nav.reduce(NavAction::ToggleMenu);
        assert!(opened.menu_open());
        let closed = opened.reduce(NavAction::ToggleMenu);
        assert!(!closed.menu_open());
    }

    #[test]
    fn reducer_close_menu_when_already_closed_keeps_state() {
        let nav = Rc::new(Navigation::default());
        let after = nav.clone().reduce(NavAction::CloseMenu);
        assert!(Rc::ptr_eq(&nav, &after));
    }

    #[test]
    fn reducer_keeps_same_state_for_unchanged_scroll() {
        let snapshot = ScrollSnapshot {
            offset: 300.0,
            viewport_height: 800.0,
            reveal_tops: vec![("a".into(), 200.0), ("b".into(), 1_500.0)],
        };
        let nav = Rc::new(Navigation::default()).reduce(NavAction::Observe(snapshot.clone()));
        assert!(nav.compact());
        assert!(nav.is_revealed("a"));

        let again = nav.clone().reduce(NavAction::Observe(snapshot));
        assert!(Rc::ptr_eq(&nav, &again));
    }

    #[test]
    fn would_change_matches_observe() {
        let mut nav = Navigation::default();
        let quiet = ScrollSnapshot {
            offset: 10.0,
            viewport_height: 800.0,
            reveal_tops: vec![("far".into(), 2_000.0)],
        };
        assert!(!nav.would_change(&quiet));
        assert!(!nav.observe(&quiet));

        let busy = ScrollSnapshot {
            offset: 10.0,
            viewport_height: 800.0,
            reveal_tops: vec![("far".into(), 100.0)],
        };
        assert!(nav.would_change(&busy));
        assert!(nav.observe(&busy));
        assert!(!nav.would_change(&busy));
    }
}
