//! Pure view-model derivation.
//!
//! [`derive_page`] turns a [`SelectionState`] into a [`PageView`] that
//! answers every conditional-rendering question the page has, so the
//! rendering layer contains no decision logic of its own and the rules
//! are testable without a browser.

use crate::catalog::{self, Product};
use crate::selection::{SelectionState, Tab};

/// Everything the page needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// The active source-selection tab.
    pub tab: Tab,
    /// The uploaded photo (data URL) for the upload panel, if any.
    pub photo: Option<String>,
    /// Whether the "Try It On" control is enabled.
    pub try_on_enabled: bool,
    /// What the preview panel shows.
    pub preview: PreviewContent,
}

/// The preview panel's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    /// Placeholder call-to-action: nothing to compose yet.
    Prompt,
    /// The composed view: the chosen person image with the selected
    /// garment's overlay panel.
    Composed {
        /// Image source for the person photo.
        person_src: String,
        /// Alt text for the person photo.
        person_alt: String,
        /// The garment being tried on.
        product: &'static Product,
    },
}

/// Derive the view-model for the current state.
///
/// The composed preview renders only when the preview was requested
/// AND the selection invariants still hold at render time; any lookup
/// that comes up empty falls back to the placeholder. When both
/// sources could resolve, the catalog model wins over the photo.
#[must_use]
pub fn derive_page(state: &SelectionState) -> PageView {
    PageView {
        tab: state.tab(),
        photo: state.photo().map(str::to_owned),
        try_on_enabled: state.ready_for_preview(),
        preview: derive_preview(state),
    }
}

fn derive_preview(state: &SelectionState) -> PreviewContent {
    if !(state.preview_visible() && state.ready_for_preview()) {
        return PreviewContent::Prompt;
    }

    let Some(product) = state.selected_product().and_then(catalog::product) else {
        return PreviewContent::Prompt;
    };

    let person = state
        .selected_model()
        .and_then(catalog::model)
        .map(|m| (m.image.to_owned(), m.name.to_owned()));
    let person = person.or_else(|| {
        state
            .photo()
            .map(|url| (url.to_owned(), "Your photo".to_owned()))
    });

    match person {
        Some((person_src, person_alt)) => PreviewContent::Composed {
            person_src,
            person_alt,
            product,
        },
        None => PreviewContent::Prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FIT_MODELS, try_on_candidates};

    fn data_url() -> String {
        "data:image/jpeg;base64,/9j/4AAQ".to_owned()
    }

    #[test]
    fn fresh_state_renders_the_prompt() {
        let view = derive_page(&SelectionState::new());
        assert_eq!(view.tab, Tab::Models);
        assert!(view.photo.is_none());
        assert!(!view.try_on_enabled);
        assert_eq!(view.preview, PreviewContent::Prompt);
    }

    #[test]
    fn try_on_enables_only_with_source_and_product() {
        let mut state = SelectionState::new();
        assert!(!derive_page(&state).try_on_enabled);

        state.select_model(FIT_MODELS[0].id);
        assert!(!derive_page(&state).try_on_enabled);

        state.select_product(try_on_candidates()[0].id);
        assert!(derive_page(&state).try_on_enabled);
    }

    #[test]
    fn preview_stays_prompt_until_requested() {
        let mut state = SelectionState::new();
        state.select_model(FIT_MODELS[0].id);
        state.select_product(try_on_candidates()[0].id);

        // Valid selection, but the preview was never requested.
        assert_eq!(derive_page(&state).preview, PreviewContent::Prompt);
    }

    #[test]
    fn composed_preview_uses_the_model_image() {
        let mut state = SelectionState::new();
        state.select_model(FIT_MODELS[0].id);
        state.select_product(try_on_candidates()[0].id);
        assert!(state.request_preview());

        match derive_page(&state).preview {
            PreviewContent::Composed {
                person_src,
                person_alt,
                product,
            } => {
                assert_eq!(person_src, FIT_MODELS[0].image);
                assert_eq!(person_alt, FIT_MODELS[0].name);
                assert_eq!(product.id, try_on_candidates()[0].id);
            }
            PreviewContent::Prompt => unreachable!("expected a composed preview"),
        }
    }

    #[test]
    fn composed_preview_uses_the_photo_when_no_model() {
        let mut state = SelectionState::new();
        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));
        state.select_product(try_on_candidates()[0].id);
        assert!(state.request_preview());

        match derive_page(&state).preview {
            PreviewContent::Composed {
                person_src,
                person_alt,
                ..
            } => {
                assert_eq!(person_src, data_url());
                assert_eq!(person_alt, "Your photo");
            }
            PreviewContent::Prompt => unreachable!("expected a composed preview"),
        }
    }

    #[test]
    fn photo_flows_into_the_upload_panel_view() {
        let mut state = SelectionState::new();
        state.select_tab(Tab::Upload);
        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));

        let view = derive_page(&state);
        assert_eq!(view.tab, Tab::Upload);
        assert_eq!(view.photo, Some(data_url()));
    }

    #[test]
    fn invalidated_preview_falls_back_to_the_prompt() {
        let mut state = SelectionState::new();
        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));
        state.select_product(try_on_candidates()[0].id);
        assert!(state.request_preview());
        state.clear_photo();

        assert_eq!(derive_page(&state).preview, PreviewContent::Prompt);
    }

    #[test]
    fn model_swap_keeps_the_composed_preview() {
        // After swapping the photo for a model, the composed preview
        // simply switches person image instead of collapsing.
        let mut state = SelectionState::new();
        state.select_tab(Tab::Upload);
        let generation = state.start_upload();
        assert!(state.finish_upload(generation, data_url()));
        state.select_product(try_on_candidates()[0].id);
        assert!(state.request_preview());

        state.select_tab(Tab::Models);
        state.select_model(FIT_MODELS[2].id);

        match derive_page(&state).preview {
            PreviewContent::Composed { person_src, .. } => {
                assert_eq!(person_src, FIT_MODELS[2].image);
            }
            PreviewContent::Prompt => unreachable!("preview must survive the source swap"),
        }
    }
}
