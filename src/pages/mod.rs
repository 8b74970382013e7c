//! Page controllers. Each user action runs one data transform followed by one
//! render into the page's container.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::{self, Tip, PRODUCTS, TEMPLES, TIPS};
use crate::filter::{self, TempleFilter, TipFilter};
use crate::render::{self, Container};
use crate::review::{self, Confirmation, ReviewQuery};
use crate::state::{self, UserProfile};
use crate::storage::{KeyValueStore, StorageError};
use crate::weather;

pub const TIPS_CONTAINER: &str = "tipsList";
pub const GALLERY_CONTAINER: &str = "gallery";
pub const CONFIRMATION_CONTAINER: &str = "confirmation";
pub const PRODUCT_SELECT: &str = "productSelect";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TipView {
    pub id: u32,
    pub text: &'static str,
    pub difficulty: catalog::Difficulty,
    pub favorite: bool,
}

impl TipView {
    fn new(tip: &Tip, favorites: &[u32]) -> Self {
        Self {
            id: tip.id,
            text: tip.text,
            difficulty: tip.difficulty,
            favorite: favorites.contains(&tip.id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TipsAction {
    /// The difficulty select changed.
    SelectDifficulty(String),
    ShowAll,
    ShowFavorites,
    ToggleFavorite(u32),
}

#[derive(Clone, Debug)]
pub struct TipsPage {
    selected: TipFilter,
    visible: Vec<TipView>,
    container: Container,
}

impl TipsPage {
    /// Initial render: every tip.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut page = Self {
            selected: TipFilter::All,
            visible: Vec::new(),
            container: Container::new(TIPS_CONTAINER),
        };
        page.render_filtered(store, TipFilter::All);
        page
    }

    fn render_filtered<S: KeyValueStore + ?Sized>(&mut self, store: &S, filter: TipFilter) {
        let favorites = state::load_favorites(store);
        let tips = filter::filter_tips(TIPS, filter);
        self.visible = tips.iter().map(|t| TipView::new(t, &favorites)).collect();
        self.container.replace(render::render_tips(&tips, &favorites));
    }

    pub fn dispatch<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        action: TipsAction,
    ) -> Result<(), StorageError> {
        match action {
            TipsAction::SelectDifficulty(value) => {
                self.selected = TipFilter::parse(&value);
                self.render_filtered(&*store, self.selected);
            }
            // the select keeps its value; only the list changes
            TipsAction::ShowAll => self.render_filtered(&*store, TipFilter::All),
            TipsAction::ShowFavorites => {
                let favorites = state::load_favorites(&*store);
                let tips = filter::favorite_tips(TIPS, &favorites);
                self.visible = tips.iter().map(|t| TipView::new(t, &favorites)).collect();
                self.container.replace(render::render_favorite_tips(&tips));
            }
            TipsAction::ToggleFavorite(id) => {
                state::toggle_favorite(store, id)?;
                self.render_filtered(&*store, self.selected);
            }
        }
        Ok(())
    }

    pub fn selected(&self) -> TipFilter {
        self.selected
    }

    pub fn visible(&self) -> &[TipView] {
        &self.visible
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

#[derive(Clone, Debug)]
pub struct TemplesPage {
    filter: TempleFilter,
    visible: Vec<&'static catalog::Temple>,
    container: Container,
}

impl Default for TemplesPage {
    fn default() -> Self {
        Self::load()
    }
}

impl TemplesPage {
    pub fn load() -> Self {
        let mut page = Self {
            filter: TempleFilter::All,
            visible: Vec::new(),
            container: Container::new(GALLERY_CONTAINER),
        };
        page.select(TempleFilter::All);
        page
    }

    pub fn select(&mut self, filter: TempleFilter) {
        self.filter = filter;
        self.visible = filter::filter_temples(TEMPLES, filter);
        self.container.replace(render::render_temples(&self.visible));
    }

    pub fn title(&self) -> &'static str {
        self.filter.title()
    }

    pub fn visible(&self) -> &[&'static catalog::Temple] {
        &self.visible
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

pub const MISSING_FIELDS_MESSAGE: &str = "Please provide both name and preference.";
pub const CLEARED_MESSAGE: &str = "Cleared saved data.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Submit { name: String, pref: String },
    Clear,
}

#[derive(Clone, Debug, Default)]
pub struct ContactPage {
    message: Option<String>,
    saved: Option<UserProfile>,
}

impl ContactPage {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let saved = state::load_user(store);
        Self {
            message: saved
                .as_ref()
                .map(|u| format!("Loaded saved name: {}", u.name)),
            saved,
        }
    }

    pub fn dispatch<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        action: ContactAction,
    ) -> Result<(), StorageError> {
        match action {
            ContactAction::Submit { name, pref } => {
                let name = name.trim();
                if name.is_empty() || pref.is_empty() {
                    self.message = Some(MISSING_FIELDS_MESSAGE.to_string());
                    return Ok(());
                }
                let saved = state::save_user(store, name, &pref)?;
                self.message = Some(format!("Saved: {} (pref: {})", saved.name, saved.pref));
                self.saved = Some(saved);
            }
            ContactAction::Clear => {
                state::clear_saved_data(store)?;
                self.saved = None;
                self.message = Some(CLEARED_MESSAGE.to_string());
            }
        }
        Ok(())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn saved(&self) -> Option<&UserProfile> {
        self.saved.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub greeting: String,
    pub random_tip: Option<String>,
    pub wind_chill: String,
}

pub fn greeting(user: Option<&UserProfile>) -> String {
    match user {
        Some(u) => format!("Welcome back, {}!", u.name),
        None => "Not signed in".to_string(),
    }
}

pub fn format_tip(tip: &Tip) -> String {
    format!("{} ({})", tip.text, tip.difficulty.as_str())
}

pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static Tip> {
    TIPS.choose(rng)
}

impl HomePage {
    pub fn load<S, R>(store: &S, rng: &mut R, temp_c: f64, wind_kmh: f64) -> Self
    where
        S: KeyValueStore + ?Sized,
        R: Rng + ?Sized,
    {
        Self {
            greeting: greeting(state::load_user(store).as_ref()),
            random_tip: random_tip(rng).map(format_tip),
            wind_chill: weather::format_wind_chill(temp_c, wind_kmh),
        }
    }
}

/// Markup for the review form's product select.
pub fn product_select() -> Container {
    let mut container = Container::new(PRODUCT_SELECT);
    container.replace(render::render_product_options(PRODUCTS));
    container
}

#[derive(Clone, Debug)]
pub struct ReviewPage {
    confirmation: Confirmation,
    container: Container,
}

impl ReviewPage {
    /// One page load; counts the submission when the query carries `product`.
    pub fn load<S: KeyValueStore + ?Sized>(
        store: &mut S,
        query: &str,
    ) -> Result<Self, StorageError> {
        let query = ReviewQuery::parse(query);
        let confirmation = review::confirm(store, &query)?;
        let mut container = Container::new(CONFIRMATION_CONTAINER);
        container.replace(confirmation.markup.clone());
        Ok(Self {
            confirmation,
            container,
        })
    }

    pub fn confirmation(&self) -> &Confirmation {
        &self.confirmation
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}
