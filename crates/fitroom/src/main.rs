use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdShirt;
use fitroom_core::{SelectionState, Tab, catalog, derive_page};
use fitroom_io::{
    Button, ModelGrid, PhotoUpload, PreviewPanel, ProductGrid, TabBar, analytics, encode,
};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the selection state via a Dioxus signal, routes every user
/// event through the state's transition functions, and renders the
/// page from the derived view-model.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut state = use_signal(SelectionState::new);
    let mut upload_error = use_signal(|| Option::<String>::None);

    // --- Event handlers ---
    let on_tab = move |tab: Tab| {
        state.write().select_tab(tab);
    };

    let on_model = move |id: fitroom_core::ModelId| {
        upload_error.set(None);
        state.write().select_model(id);
    };

    let on_product = move |id: fitroom_core::ProductId| {
        state.write().select_product(id);
    };

    let on_clear_photo = move |()| {
        upload_error.set(None);
        state.write().clear_photo();
    };

    // File chosen: snapshot the upload generation synchronously, then
    // read and encode in a spawned task. A result whose generation no
    // longer matches is discarded by the state itself, so a slow decode
    // can never resurrect a selection the user has since changed.
    let on_photo_file = move |file: FileData| {
        let generation = state.write().start_upload();
        upload_error.set(None);
        spawn(async move {
            match encode::read_to_data_url(&file).await {
                Ok(data_url) => {
                    if state.write().finish_upload(generation, data_url) {
                        analytics::track_photo_upload();
                    }
                }
                Err(e) => {
                    // Selection state is untouched; just surface the message.
                    upload_error.set(Some(format!("Could not load photo: {e}")));
                }
            }
        });
    };

    let on_try_on = move |_| {
        if state.write().request_preview() {
            analytics::track_try_on();
        }
    };

    // --- Derived view ---
    let view = derive_page(&state.read());
    let selected_model = state.read().selected_model();
    let selected_product = state.read().selected_product();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "min-h-screen bg-[var(--bg)] text-[var(--text)]",
            // Header
            header { class: "bg-[var(--header-bg)] text-white py-16 text-center",
                div { class: "max-w-3xl mx-auto px-6",
                    h1 { class: "text-4xl font-bold mb-4", "Virtual FitRoom" }
                    p { class: "text-[var(--text-secondary)] text-lg",
                        "Try on clothes virtually using a similar model or your own photo before buying."
                    }
                }
            }

            // Main content area
            div { class: "max-w-6xl mx-auto py-12 px-6 grid grid-cols-1 lg:grid-cols-2 gap-8",
                // Left panel: source + product selection
                div { class: "bg-[var(--surface)] rounded-lg shadow-sm p-6",
                    TabBar {
                        active: view.tab,
                        on_select: on_tab,
                    }

                    if view.tab == Tab::Models {
                        ModelGrid {
                            models: catalog::FIT_MODELS,
                            selected: selected_model,
                            on_select: on_model,
                        }
                    } else {
                        PhotoUpload {
                            photo: view.photo.clone(),
                            error: upload_error(),
                            on_select: on_photo_file,
                            on_clear: on_clear_photo,
                        }
                    }

                    ProductGrid {
                        products: catalog::try_on_candidates(),
                        selected: selected_product,
                        on_select: on_product,
                    }

                    // Try It On trigger
                    div { class: "mt-8",
                        Button {
                            full_width: true,
                            disabled: !view.try_on_enabled,
                            onclick: on_try_on,
                            Icon {
                                width: 20,
                                height: 20,
                                class: "mr-2",
                                icon: LdShirt,
                            }
                            "Try It On"
                        }
                    }
                }

                // Right panel: preview
                PreviewPanel {
                    content: view.preview.clone(),
                }
            }
        }
    }
}
