//! The fitting-room selection state and its transition functions.
//!
//! All page behavior flows through [`SelectionState`]: which tab is
//! active, which person-image source is chosen (catalog model or
//! uploaded photo, never both), which garment is selected, and whether
//! the composed preview is showing. Rendering code never mutates state
//! directly; it calls these transitions and re-derives the view.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, ModelId, ProductId};

/// The two source-selection tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    /// Pick a catalog model with a similar build.
    #[default]
    Models,
    /// Upload your own photo.
    Upload,
}

impl Tab {
    /// Both tabs in display order.
    pub const ALL: [Self; 2] = [Self::Models, Self::Upload];

    /// Display label for the tab control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Models => "Choose a Model",
            Self::Upload => "Upload Your Photo",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mutable record of the user's current choices.
///
/// Invariants upheld by every transition:
/// - at most one of {selected model, uploaded photo} is set;
/// - `preview_visible` is true only while a product and a person-image
///   source are both selected — transitions that break the condition
///   force it back to false.
///
/// The upload generation counter makes the asynchronous photo decode
/// cancellable: [`start_upload`](Self::start_upload) is called
/// synchronously when a file is chosen, and any transition that
/// invalidates the pending decode advances the counter so the late
/// [`finish_upload`](Self::finish_upload) is discarded instead of
/// resurrecting a cleared selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionState {
    tab: Tab,
    model: Option<ModelId>,
    photo: Option<String>,
    product: Option<ProductId>,
    preview_visible: bool,
    upload_generation: u64,
}

impl SelectionState {
    /// Fresh state: models tab active, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tab.
    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    /// The selected catalog model, if any.
    #[must_use]
    pub const fn selected_model(&self) -> Option<ModelId> {
        self.model
    }

    /// The uploaded photo as a data URL, if any.
    #[must_use]
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    /// The selected product, if any.
    #[must_use]
    pub const fn selected_product(&self) -> Option<ProductId> {
        self.product
    }

    /// Whether the composed preview is showing.
    #[must_use]
    pub const fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    /// Whether a person-image source (model or photo) is selected.
    #[must_use]
    pub const fn has_person_source(&self) -> bool {
        self.model.is_some() || self.photo.is_some()
    }

    /// Whether the preview precondition holds: a product AND a
    /// person-image source are both selected.
    #[must_use]
    pub const fn ready_for_preview(&self) -> bool {
        self.has_person_source() && self.product.is_some()
    }

    /// Switch the active tab. Touches nothing else.
    pub const fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Select a catalog model, clearing any uploaded photo.
    ///
    /// Only applies while the models tab is active and the id exists in
    /// the catalog; otherwise a silent no-op. Also invalidates any
    /// in-flight photo decode.
    pub fn select_model(&mut self, id: ModelId) {
        if self.tab != Tab::Models || catalog::model(id).is_none() {
            return;
        }
        self.model = Some(id);
        self.photo = None;
        self.upload_generation += 1;
        self.reevaluate_preview();
    }

    /// Begin an asynchronous photo upload.
    ///
    /// Call synchronously when the file is chosen and hand the returned
    /// generation to [`finish_upload`](Self::finish_upload) once the
    /// decode completes.
    pub const fn start_upload(&mut self) -> u64 {
        self.upload_generation += 1;
        self.upload_generation
    }

    /// Complete an asynchronous photo upload.
    ///
    /// Applies the decoded data URL and clears the selected model —
    /// unless the generation is stale (a newer upload started, a model
    /// was selected, or the photo was cleared in the meantime) or the
    /// data URL is empty (nothing was decoded). Returns whether the
    /// photo was applied.
    pub fn finish_upload(&mut self, generation: u64, data_url: String) -> bool {
        if generation != self.upload_generation || data_url.is_empty() {
            return false;
        }
        self.photo = Some(data_url);
        self.model = None;
        self.reevaluate_preview();
        true
    }

    /// Clear the uploaded photo, returning the upload panel to its
    /// empty drop-zone appearance. The prior value is unrecoverable.
    pub fn clear_photo(&mut self) {
        self.photo = None;
        self.upload_generation += 1;
        self.reevaluate_preview();
    }

    /// Select a garment to try on.
    ///
    /// Only ids from the try-on candidate set are accepted; anything
    /// else is a silent no-op, so products outside the filtered tiles
    /// cannot be selected through this interface.
    pub fn select_product(&mut self, id: ProductId) {
        if !catalog::is_try_on_candidate(id) {
            return;
        }
        self.product = Some(id);
        self.reevaluate_preview();
    }

    /// Show the composed preview if the precondition holds; otherwise
    /// a silent no-op. Returns whether the preview is visible.
    pub const fn request_preview(&mut self) -> bool {
        if self.ready_for_preview() {
            self.preview_visible = true;
        }
        self.preview_visible
    }

    /// Force the preview closed when a transition broke its
    /// precondition. An invalid visible preview is never stored.
    const fn reevaluate_preview(&mut self) {
        self.preview_visible = self.preview_visible && self.ready_for_preview();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FIT_MODELS, PRODUCTS, try_on_candidates};

    fn first_model() -> ModelId {
        FIT_MODELS[0].id
    }

    fn first_candidate() -> ProductId {
        try_on_candidates()[0].id
    }

    fn data_url() -> String {
        "data:image/png;base64,iVBORw0KGgo=".to_owned()
    }

    // --- Tab tests ---

    #[test]
    fn all_contains_every_tab() {
        assert_eq!(Tab::ALL.len(), 2);
        assert_eq!(Tab::ALL[0], Tab::Models);
        assert_eq!(Tab::default(), Tab::Models);
    }

    #[test]
    fn tab_labels() {
        assert_eq!(Tab::Models.to_string(), "Choose a Model");
        assert_eq!(Tab::Upload.to_string(), "Upload Your Photo");
    }

    #[test]
    fn select_tab_touches_nothing_else() {
        let mut state = SelectionState::new();
        state.select_model(first_model());
        state.select_product(first_candidate());
        assert!(state.request_preview());

        state.select_tab(Tab::Upload);
        assert_eq!(state.tab(), Tab::Upload);
        assert_eq!(state.selected_model(), Some(first_model()));
        assert_eq!(state.selected_product(), Some(first_candidate()));
        assert!(state.preview_visible());
    }

    // --- Person-source exclusivity (at most one of model/photo) ---

    #[test]
    fn selecting_a_model_clears_the_photo() {
        let mut state = SelectionState::new();
        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));
        assert!(state.photo().is_some());

        state.select_model(first_model());
        assert_eq!(state.selected_model(), Some(first_model()));
        assert!(state.photo().is_none());
    }

    #[test]
    fn uploading_a_photo_clears_the_model() {
        let mut state = SelectionState::new();
        state.select_model(first_model());

        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));
        assert!(state.selected_model().is_none());
        assert_eq!(state.photo(), Some(data_url().as_str()));
    }

    #[test]
    fn model_and_photo_never_coexist_across_sequences() {
        // Interleave every person-source transition and check the
        // exclusivity invariant after each step.
        let mut state = SelectionState::new();
        let check = |state: &SelectionState| {
            assert!(
                !(state.selected_model().is_some() && state.photo().is_some()),
                "model and photo set simultaneously"
            );
        };

        state.select_model(first_model());
        check(&state);
        let generation = state.start_upload();
        check(&state);
        state.finish_upload(generation, data_url());
        check(&state);
        state.select_model(FIT_MODELS[1].id);
        check(&state);
        state.clear_photo();
        check(&state);
        let generation = state.start_upload();
        state.finish_upload(generation, data_url());
        check(&state);
    }

    // --- Model selection guards ---

    #[test]
    fn select_model_requires_models_tab() {
        let mut state = SelectionState::new();
        state.select_tab(Tab::Upload);
        state.select_model(first_model());
        assert!(state.selected_model().is_none());
    }

    #[test]
    fn select_model_rejects_unknown_ids() {
        let mut state = SelectionState::new();
        state.select_model(ModelId::new(999));
        assert!(state.selected_model().is_none());
    }

    // --- Upload generation guard ---

    #[test]
    fn stale_upload_is_discarded_after_model_selection() {
        let mut state = SelectionState::new();
        let generation = state.start_upload();
        // The user picks a model while the decode is in flight.
        state.select_model(first_model());

        assert!(!state.finish_upload(generation, data_url()));
        assert_eq!(state.selected_model(), Some(first_model()));
        assert!(state.photo().is_none());
    }

    #[test]
    fn stale_upload_is_discarded_after_clear() {
        let mut state = SelectionState::new();
        let generation = state.start_upload();
        state.clear_photo();

        assert!(!state.finish_upload(generation, data_url()));
        assert!(state.photo().is_none());
    }

    #[test]
    fn stale_upload_is_discarded_after_newer_upload() {
        let mut state = SelectionState::new();
        let first = state.start_upload();
        let second = state.start_upload();

        assert!(!state.finish_upload(first, "data:image/png;base64,old".to_owned()));
        assert!(state.finish_upload(second, "data:image/png;base64,new".to_owned()));
        assert_eq!(state.photo(), Some("data:image/png;base64,new"));
    }

    #[test]
    fn empty_data_url_is_a_silent_no_op() {
        let mut state = SelectionState::new();
        let generation = state.start_upload();
        assert!(!state.finish_upload(generation, String::new()));
        assert!(state.photo().is_none());
    }

    // --- Clearing the photo ---

    #[test]
    fn clearing_the_photo_empties_the_panel_for_good() {
        let mut state = SelectionState::new();
        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));

        state.clear_photo();
        assert!(state.photo().is_none());

        // Nothing re-populates the photo without a fresh upload.
        state.select_tab(Tab::Models);
        state.select_tab(Tab::Upload);
        state.select_product(first_candidate());
        assert!(state.photo().is_none());
    }

    // --- Product selection ---

    #[test]
    fn select_product_accepts_candidates_only() {
        let mut state = SelectionState::new();
        for p in try_on_candidates() {
            state.select_product(p.id);
            assert_eq!(state.selected_product(), Some(p.id));
        }
    }

    #[test]
    fn select_product_rejects_non_candidates() {
        let mut state = SelectionState::new();
        let outside: Vec<_> = PRODUCTS
            .iter()
            .filter(|p| !catalog::is_try_on_candidate(p.id))
            .collect();
        assert!(!outside.is_empty(), "catalog must carry excluded products");

        for p in outside {
            state.select_product(p.id);
            assert!(state.selected_product().is_none());
        }
        state.select_product(ProductId::new(999));
        assert!(state.selected_product().is_none());
    }

    // --- Preview guard ---

    #[test]
    fn preview_requires_product_and_person_source() {
        let mut state = SelectionState::new();
        assert!(!state.request_preview());
        assert!(!state.preview_visible());

        state.select_model(first_model());
        assert!(!state.request_preview());

        state.select_product(first_candidate());
        assert!(state.request_preview());
        assert!(state.preview_visible());
    }

    #[test]
    fn preview_with_photo_source() {
        let mut state = SelectionState::new();
        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));
        assert!(!state.request_preview());

        state.select_product(first_candidate());
        assert!(state.request_preview());
    }

    #[test]
    fn invalidating_transition_closes_the_preview() {
        let mut state = SelectionState::new();
        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));
        state.select_product(first_candidate());
        assert!(state.request_preview());

        // Clearing the only person source must close the preview.
        state.clear_photo();
        assert!(!state.preview_visible());

        // And a later request without a source stays a no-op.
        assert!(!state.request_preview());
    }

    #[test]
    fn substituting_the_person_source_keeps_the_preview_open() {
        let mut state = SelectionState::new();
        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));
        state.select_product(first_candidate());
        assert!(state.request_preview());

        // Model replaces photo: still a valid source, preview stays.
        state.select_tab(Tab::Models);
        state.select_model(first_model());
        assert!(state.photo().is_none());
        assert!(state.preview_visible());
    }

    // --- End-to-end sequence (upload-first walkthrough) ---

    #[test]
    fn upload_then_product_then_preview_then_model_swap() {
        let mut state = SelectionState::new();

        state.select_tab(Tab::Upload);
        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));
        assert!(state.selected_model().is_none());

        state.select_product(first_candidate());
        assert!(state.selected_model().is_none());
        assert!(state.photo().is_some());

        assert!(state.request_preview());
        assert!(state.preview_visible());

        state.select_tab(Tab::Models);
        state.select_model(first_model());
        assert!(state.photo().is_none());
        assert!(state.preview_visible(), "model substitutes for the photo");
    }

    // --- Serde ---

    #[test]
    fn state_serde_round_trip() {
        let mut state = SelectionState::new();
        state.select_model(first_model());
        state.select_product(first_candidate());
        state.request_preview();

        let json = serde_json::to_string(&state).unwrap();
        let restored: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.selected_model(), state.selected_model());
        assert_eq!(restored.selected_product(), state.selected_product());
        assert_eq!(restored.preview_visible(), state.preview_visible());
    }
}
