//! Preview panel: placeholder prompt or the composed try-on view.
//!
//! The "composition" is purely visual — the chosen person image with
//! the selected garment's descriptive card overlaid. Which of the two
//! states renders is decided by the core view-model, never here.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdShirt;
use fitroom_core::PreviewContent;

use super::{Button, ButtonSize, ButtonVariant};

/// Props for the [`PreviewPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PreviewPanelProps {
    /// What to show, as derived from the selection state.
    content: PreviewContent,
}

/// Right-hand preview panel.
#[component]
pub fn PreviewPanel(props: PreviewPanelProps) -> Element {
    let body = match props.content {
        PreviewContent::Prompt => render_prompt(),
        PreviewContent::Composed {
            ref person_src,
            ref person_alt,
            product,
        } => render_composed(person_src, person_alt, product),
    };

    rsx! {
        div { class: "bg-[var(--surface)] rounded-lg shadow-sm p-6 h-full",
            h3 { class: "font-medium mb-4 text-[var(--text-heading)]", "Preview" }
            {body}
        }
    }
}

/// Placeholder call-to-action shown until a valid preview is requested.
fn render_prompt() -> Element {
    rsx! {
        div { class: "bg-[var(--preview-bg)] h-[500px] flex items-center justify-center rounded-lg",
            div { class: "text-center max-w-md p-6",
                Icon {
                    width: 64,
                    height: 64,
                    class: "text-[var(--muted)] mx-auto mb-4",
                    icon: LdShirt,
                }
                h3 { class: "text-xl font-medium mb-2", "Ready to try on!" }
                p { class: "text-[var(--text-secondary)] mb-4",
                    "Select a model or upload a photo, then pick a product to preview."
                }
            }
        }
    }
}

/// The composed view plus the product details strip underneath.
fn render_composed(
    person_src: &str,
    person_alt: &str,
    product: &'static fitroom_core::Product,
) -> Element {
    rsx! {
        div { class: "bg-[var(--preview-bg)] h-[500px] flex items-center justify-center 
                      rounded-lg overflow-hidden",
            div { class: "relative",
                img {
                    src: "{person_src}",
                    alt: "{person_alt}",
                    class: "h-[450px] object-contain",
                }
                div { class: "absolute inset-0 flex items-center justify-center",
                    div { class: "bg-[var(--surface)]/80 p-4 rounded-lg backdrop-blur 
                                  max-w-xs text-center",
                        h4 { class: "font-bold", "{product.name}" }
                        p { class: "text-[var(--text-secondary)] text-sm my-2",
                            "Perfect fit! This item complements your style."
                        }
                        div { class: "flex justify-center gap-2 mt-4",
                            a { href: "/product/{product.slug}",
                                Button {
                                    size: ButtonSize::Sm,
                                    onclick: move |_| {},
                                    "View Product"
                                }
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Sm,
                                onclick: move |_| {},
                                "Try Different Size"
                            }
                        }
                    }
                }
            }
        }

        div { class: "mt-6 border-t border-[var(--border)] pt-4",
            h4 { class: "font-bold mb-2", "{product.name}" }
            p { class: "text-sm text-[var(--text-secondary)]", "{product.description}" }
            div { class: "flex justify-between items-center mt-4",
                span { class: "font-bold text-lg", "{product.price}" }
                a { href: "/product/{product.slug}",
                    Button {
                        onclick: move |_| {},
                        "View Details"
                    }
                }
            }
        }
    }
}
