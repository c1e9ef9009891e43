//! Try-on product picker grid.
//!
//! Displays the candidate garments as selectable tiles with thumbnail,
//! name, and price. The candidate list itself is computed by the core
//! catalog; this component just renders whatever it is given.

use dioxus::prelude::*;
use fitroom_core::{Product, ProductId};

/// Props for the [`ProductGrid`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ProductGridProps {
    /// The candidate garments, in display order.
    products: Vec<&'static Product>,
    /// Currently selected product, if any.
    selected: Option<ProductId>,
    /// Callback fired when a product tile is clicked.
    on_select: EventHandler<ProductId>,
}

/// Grid of selectable garment tiles.
#[component]
pub fn ProductGrid(props: ProductGridProps) -> Element {
    rsx! {
        section { class: "mt-8",
            h3 { class: "font-medium mb-4 text-[var(--text-heading)]",
                "Select a product to try on"
            }
            div { class: "grid grid-cols-2 sm:grid-cols-3 gap-3",

                for product in props.products.iter().copied() {
                    {render_tile(product, props.selected == Some(product.id), &props.on_select)}
                }
            }
            div { class: "mt-4 text-center",
                a {
                    href: "/shop",
                    class: "text-[var(--text-accent)] text-sm hover:underline",
                    "View all products"
                }
            }
        }
    }
}

/// Render a single garment tile.
fn render_tile(
    product: &'static Product,
    is_selected: bool,
    on_select: &EventHandler<ProductId>,
) -> Element {
    let border = if is_selected {
        "border-2 border-[var(--border-accent)]"
    } else {
        "border border-[var(--border)] hover:border-[var(--border-accent)]"
    };

    let onclick = {
        let on_select = *on_select;
        move |_| on_select.call(product.id)
    };

    rsx! {
        button {
            class: "rounded-lg overflow-hidden cursor-pointer text-left transition-colors 
                    bg-[var(--surface)] {border}",
            onclick: onclick,
            "aria-pressed": "{is_selected}",

            div { class: "aspect-square bg-[var(--preview-bg)]",
                if let Some(thumb) = product.images.first() {
                    img {
                        src: "{thumb}",
                        alt: "{product.name}",
                        class: "w-full h-full object-cover",
                    }
                }
            }
            div { class: "p-2",
                p { class: "text-xs font-medium truncate", "{product.name}" }
                p { class: "text-xs text-[var(--text-secondary)]", "{product.price}" }
            }
        }
    }
}
