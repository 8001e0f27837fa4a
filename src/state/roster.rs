use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, error};
use serde::Deserialize;
use thiserror::Error;
use yew::prelude::*;

const ACADEMY_JSON: &str = include_str!("../../data/academy.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RosterCategory {
    #[default]
    HeadStaff,
    PubgMobile,
    Fifa,
    Valorant,
}

impl RosterCategory {
    /// Tab order.
    pub const ALL: [RosterCategory; 4] = [
        RosterCategory::HeadStaff,
        RosterCategory::PubgMobile,
        RosterCategory::Fifa,
        RosterCategory::Valorant,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RosterCategory::HeadStaff => "head-staff",
            RosterCategory::PubgMobile => "pubg-mobile",
            RosterCategory::Fifa => "fifa",
            RosterCategory::Valorant => "valorant",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RosterCategory::HeadStaff => "Head Staff",
            RosterCategory::PubgMobile => "PUBG Mobile",
            RosterCategory::Fifa => "FIFA",
            RosterCategory::Valorant => "Valorant",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
    #[serde(rename = "image")]
    pub image_descriptor: String,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("roster document has no `{0}` category")]
    MissingCategory(&'static str),
    #[error("roster document names unknown category `{0}`")]
    UnknownCategory(String),
}

/// Every category's members, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    categories: HashMap<RosterCategory, Vec<Member>>,
}

impl Roster {
    pub fn from_json(source: &str) -> Result<Self, RosterError> {
        let raw: HashMap<String, Vec<Member>> = serde_json::from_str(source)?;

        let mut categories = HashMap::with_capacity(raw.len());
        for (key, members) in raw {
            let category =
                RosterCategory::from_key(&key).ok_or(RosterError::UnknownCategory(key))?;
            categories.insert(category, members);
        }

        if let Some(missing) = RosterCategory::ALL
            .into_iter()
            .find(|category| !categories.contains_key(category))
        {
            return Err(RosterError::MissingCategory(missing.key()));
        }

        Ok(Self { categories })
    }

    /// The academy roster bundled into the binary.
    pub fn academy() -> Result<Self, RosterError> {
        Self::from_json(ACADEMY_JSON)
    }

    pub fn members(&self, category: RosterCategory) -> &[Member] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Loads the bundled roster, falling back to an empty one so the rest of the page still renders.
pub fn load_academy() -> Rc<Roster> {
    match Roster::academy() {
        Ok(roster) => Rc::new(roster),
        Err(e) => {
            error!("Failed to load academy roster: {}", e);
            Rc::new(Roster::default())
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RosterSelector {
    roster: Rc<Roster>,
    active: RosterCategory,
}

impl RosterSelector {
    pub fn new(roster: Rc<Roster>) -> Self {
        Self {
            roster,
            active: RosterCategory::default(),
        }
    }

    pub fn select_category(&mut self, category: RosterCategory) {
        debug!("Selected roster tab {}", category.key());
        self.active = category;
    }

    pub fn active_category(&self) -> RosterCategory {
        self.active
    }

    pub fn active_members(&self) -> &[Member] {
        self.roster.members(self.active)
    }
}

impl Reducible for RosterSelector {
    type Action = RosterCategory;

    fn reduce(self: Rc<Self>, category: Self::Action) -> Rc<Self> {
        if self.active == category {
            return self;
        }
        let mut next = (*self).clone();
        next.select_category(category);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_roster_has_every_category() {
        let roster = Roster::academy().expect("bundled roster");
        let sizes: Vec<usize> = RosterCategory::ALL
            .iter()
            .map(|c| roster.members(*c).len())
            .collect();
        assert_eq!(sizes, vec![4, 13, 2, 13]);
    }

    #[test]
    fn keys_round_trip_through_from_key() {
        for category in RosterCategory::ALL {
            assert_eq!(RosterCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(RosterCategory::from_key("overwatch"), None);
    }

    #[test]
    fn selector_starts_on_head_staff() {
        let selector = RosterSelector::new(Rc::new(Roster::academy().unwrap()));
        assert_eq!(selector.active_category(), RosterCategory::HeadStaff);
        assert_eq!(selector.active_members()[0].name, "Alex Rodriguez");
    }

    #[test]
    fn selecting_returns_that_category_in_order() {
        let roster = Rc::new(Roster::academy().unwrap());
        let mut selector = RosterSelector::new(roster.clone());
        for category in RosterCategory::ALL {
            selector.select_category(category);
            assert_eq!(selector.active_members(), roster.members(category));
        }

        selector.select_category(RosterCategory::Fifa);
        let names: Vec<&str> = selector
            .active_members()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["Diego Santos", "Coach Roberto"]);
    }

    #[test]
    fn reducer_keeps_same_state_for_repeat_selection() {
        let selector = Rc::new(RosterSelector::new(Rc::new(Roster::academy().unwrap())));
        let same = selector.clone().reduce(RosterCategory::HeadStaff);
        assert!(Rc::ptr_eq(&selector, &same));

        let switched = selector.reduce(RosterCategory::Valorant);
        assert_eq!(switched.active_category(), RosterCategory::Valorant);
        assert_eq!(switched.active_members().len(), 13);
    }

    #[test]
    fn missing_category_is_rejected() {
        let source = r#"{ "head-staff": [], "pubg-mobile": [], "fifa": [] }"#;
        assert!(matches!(
            Roster::from_json(source),
            Err(RosterError::MissingCategory("valorant"))
        ));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let source = r#"{ "head-staff": [], "pubg-mobile": [], "fifa": [], "valorant": [], "chess": [] }"#;
        match Roster::from_json(source) {
            Err(RosterError::UnknownCategory(key)) => assert_eq!(key, "chess"),
            other => panic!("expected unknown category, got {:?}", other),
        }
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        assert!(matches!(
            Roster::from_json("{ not json"),
            Err(RosterError::Parse(_))
        ));
    }
}
