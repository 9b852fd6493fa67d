//! Page root: owns every piece of shared state and wires the panels.
//!
//! The assistant transcript, the trail result set, the conversation
//! context, the shared hovered id and the selected trail all live here.
//! The map scene and the result list are projections of that state and
//! never talk to each other directly.

use std::time::Instant;

use serde_json::Value;

use crate::api::client::{ConversationApi, SearchOutcome};
use crate::api::types::Trail;
use crate::chat::session::ChatSession;
use crate::config::AppConfig;
use crate::detail::HikeDetail;
use crate::hover::{HoverLink, HoverWatch};
use crate::list::ResultList;
use crate::map::boundary::fetch_boundary;
use crate::map::projection::Pixel;
use crate::map::scene::MapScene;

/// Application root tying transcript, results, map and list together.
pub struct App<C: ConversationApi> {
    config: AppConfig,
    client: C,
    session: ChatSession,
    results: Vec<Trail>,
    context: Value,
    hover: HoverLink,
    scene: MapScene,
    list: ResultList,
    selected: Option<HikeDetail>,
}

impl<C: ConversationApi> App<C> {
    /// Create the page root from a config and a backend client.
    #[must_use]
    pub fn new(config: AppConfig, client: C) -> Self {
        let scene = MapScene::new(&config.map);
        let list = ResultList::new(config.map.viewport_height_px);
        Self {
            config,
            client,
            session: ChatSession::new(),
            results: Vec::new(),
            context: Value::Null,
            hover: HoverLink::new(),
            scene,
            list,
            selected: None,
        }
    }

    /// Conversation transcript state.
    #[must_use]
    pub const fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Current result set, most relevant first.
    #[must_use]
    pub fn results(&self) -> &[Trail] {
        &self.results
    }

    /// Map scene.
    #[must_use]
    pub const fn scene(&self) -> &MapScene {
        &self.scene
    }

    /// Result list.
    #[must_use]
    pub const fn list(&self) -> &ResultList {
        &self.list
    }

    /// Detail panel for the selected trail, when one is open.
    #[must_use]
    pub const fn selected(&self) -> Option<&HikeDetail> {
        self.selected.as_ref()
    }

    /// Opaque conversation context threaded into the next turn.
    #[must_use]
    pub const fn context(&self) -> &Value {
        &self.context
    }

    /// Currently hovered trail id.
    #[must_use]
    pub fn hovered_id(&self) -> Option<String> {
        self.hover.get()
    }

    /// Subscribe a renderer to hover changes.
    #[must_use]
    pub fn hover_watch(&self) -> HoverWatch {
        self.hover.watch()
    }

    /// Run one conversation turn: append the user message, call the
    /// backend, then apply the outcome unless a newer send superseded it.
    ///
    /// Blank input is ignored. On failure the transcript gets the fixed
    /// error text and the current results are kept.
    pub async fn send_message(&mut self, input: &str) {
        let Some(token) = self.session.begin_send(input) else {
            return;
        };

        let outcome = self
            .client
            .converse(self.session.transcript(), &self.results, &self.context)
            .await;

        match outcome {
            Ok(outcome) => {
                // Stale outcomes update nothing: a newer send owns the page.
                if self.session.is_current(token) {
                    self.apply_outcome(&outcome);
                }
                self.session.complete(token, Ok(outcome.reply));
            }
            Err(error) => self.session.complete(token, Err(error)),
        }
    }

    /// Replace results, context, map layer and list wholesale from one
    /// successful turn.
    fn apply_outcome(&mut self, outcome: &SearchOutcome) {
        tracing::info!(results = outcome.results.len(), "applying conversation outcome");

        self.results = outcome.results.clone();
        self.context = outcome.context.clone();

        // A fresh result set invalidates the old hover and selection.
        self.hover.clear();
        self.selected = None;
        self.scene.set_trails(&self.results, None);
        self.list.set_results(&self.results, None);
    }

    /// Load the park boundary overlay. Failure is logged and swallowed;
    /// the map works without the overlay.
    pub async fn load_boundary(&mut self) {
        match fetch_boundary(&self.config.boundary_query).await {
            Ok(layer) => self.scene.set_boundary(layer),
            Err(error) => {
                tracing::warn!("boundary lookup failed, continuing without overlay: {error}");
            }
        }
    }

    /// Apply a hover originating on the map: restyle both surfaces and
    /// center the matching card, unless the visitor scrolled recently.
    pub fn hover_from_map(&mut self, id: Option<&str>, now: Instant) {
        if !self.hover.set(id.map(ToOwned::to_owned)) {
            return;
        }
        self.scene.set_hovered(&self.results, id);
        self.list.apply_hover(id);
        if let Some(id) = id {
            self.list.scroll_to_card(id, now);
        }
    }

    /// Apply a hover originating on a list card: restyle both surfaces
    /// without scrolling the list under the pointer.
    pub fn hover_from_list(&mut self, id: Option<&str>) {
        if !self.hover.set(id.map(ToOwned::to_owned)) {
            return;
        }
        self.scene.set_hovered(&self.results, id);
        self.list.apply_hover(id);
    }

    /// Forward a pointer move to the scene, then propagate the hit (or
    /// its absence) as a map-originated hover.
    pub fn pointer_move(&mut self, pixel: Pixel, now: Instant) {
        let hit = self.scene.pointer_move(pixel);
        self.hover_from_map(hit.as_deref(), now);
    }

    /// Record a manual scroll of the result panel.
    pub fn note_user_scroll(&mut self, now: Instant, scroll_top: f64) {
        self.list.note_user_scroll(now, scroll_top);
    }

    /// Open the detail panel for a trail of the current result set.
    /// Unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        self.selected = self
            .results
            .iter()
            .find(|trail| trail.id == id)
            .map(|trail| HikeDetail::from_trail(trail, &self.config.image_hosts));
    }

    /// Close the detail panel.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Toggle the expanded description of one card.
    pub fn toggle_card(&mut self, id: &str) {
        self.list.toggle_expanded(id);
    }

    /// Tear down the map scene (unmount semantics).
    pub fn reset_scene(&mut self) {
        self.scene.reset();
    }
}
