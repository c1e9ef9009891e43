//! Catalog model picker grid.
//!
//! Displays a tile per catalog model. Clicking a tile selects that
//! model as the person-image source; the selected tile is highlighted
//! with a border accent.

use dioxus::prelude::*;
use fitroom_core::{FitModel, ModelId};

/// Props for the [`ModelGrid`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ModelGridProps {
    /// The models to offer.
    models: &'static [FitModel],
    /// Currently selected model, if any.
    selected: Option<ModelId>,
    /// Callback fired when a model tile is clicked.
    on_select: EventHandler<ModelId>,
}

/// Grid of selectable model tiles.
#[component]
pub fn ModelGrid(props: ModelGridProps) -> Element {
    rsx! {
        section {
            h3 { class: "font-medium mb-4 text-[var(--text-heading)]",
                "Select a model with similar build"
            }
            div { class: "grid grid-cols-2 sm:grid-cols-4 gap-4",

                for model in props.models {
                    {render_tile(model, props.selected == Some(model.id), &props.on_select)}
                }
            }
        }
    }
}

/// Render a single model tile.
fn render_tile(
    model: &'static FitModel,
    is_selected: bool,
    on_select: &EventHandler<ModelId>,
) -> Element {
    let border = if is_selected {
        "border-2 border-[var(--border-accent)]"
    } else {
        "border border-[var(--border)] hover:border-[var(--border-accent)]"
    };

    let onclick = {
        let on_select = *on_select;
        move |_| on_select.call(model.id)
    };

    rsx! {
        button {
            class: "rounded-lg overflow-hidden cursor-pointer text-left transition-colors 
                    bg-[var(--surface)] {border}",
            onclick: onclick,
            "aria-pressed": "{is_selected}",

            div { class: "aspect-[3/4] bg-[var(--preview-bg)]",
                img {
                    src: "{model.image}",
                    alt: "{model.name}",
                    class: "w-full h-full object-cover",
                }
            }
            div { class: "p-2 text-center",
                p { class: "font-medium text-sm", "{model.name}" }
                p { class: "text-xs text-[var(--text-secondary)]",
                    "{model.height}, {model.build}"
                }
            }
        }
    }
}
