//! Photo upload panel with drag-and-drop and a file picker.
//!
//! While no photo is set, renders a drop zone; once a photo lands it
//! shows the photo with a control to choose a different one. The
//! asynchronous read/encode work happens in the app layer so it can be
//! tied to the selection state's upload generation — this component
//! only validates the extension and hands the chosen file up.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

use super::{Button, ButtonSize, ButtonVariant};
use crate::encode;

/// Props for the [`PhotoUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PhotoUploadProps {
    /// The current uploaded photo as a data URL, if any.
    photo: Option<String>,
    /// Decode failure message from the app layer, if any.
    error: Option<String>,
    /// Called with the chosen file when it passes extension filtering.
    on_select: EventHandler<FileData>,
    /// Called when the user discards the current photo.
    on_clear: EventHandler<()>,
}

/// Drop zone and picker for the user's own photo.
#[component]
pub fn PhotoUpload(props: PhotoUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut rejected = use_signal(|| Option::<String>::None);

    // Validate and forward the first file from a list. Shared by the
    // file-picker and drag-and-drop paths.
    let mut offer_files = move |files: Vec<FileData>| {
        if let Some(file) = files.into_iter().next() {
            let name = file.name();
            if encode::mime_for_filename(&name).is_none() {
                rejected.set(Some(format!("Unsupported file type: {name}")));
                return;
            }
            rejected.set(None);
            props.on_select.call(file);
        }
    };

    let handle_files = move |evt: FormEvent| {
        offer_files(evt.files());
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        offer_files(evt.files());
    };

    let border_class = if dragging() {
        "border-[var(--border-accent)] bg-[var(--surface-active)]"
    } else {
        "border-[var(--border-muted)] bg-[var(--surface)]"
    };

    // App-level decode errors take precedence over local rejections.
    let message = props.error.clone().or_else(|| rejected());

    rsx! {
        section {
            h3 { class: "font-medium mb-4 text-[var(--text-heading)]", "Upload your photo" }

            div {
                class: "border-2 border-dashed rounded-lg p-6 text-center transition-colors {border_class}",
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| {
                    dragging.set(false);
                },
                ondrop: handle_drop,

                if let Some(ref err) = message {
                    p { class: "text-[var(--text-error)] mb-2", "{err}" }
                }

                if let Some(ref photo) = props.photo {
                    div { class: "flex flex-col items-center",
                        img {
                            src: "{photo}",
                            alt: "Your photo",
                            class: "w-48 h-64 object-cover rounded-md mb-4",
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Sm,
                            onclick: move |_| props.on_clear.call(()),
                            "Choose Different Photo"
                        }
                    }
                } else {
                    Icon {
                        width: 48,
                        height: 48,
                        class: "text-[var(--muted)] mx-auto mb-3",
                        icon: LdUpload,
                    }
                    p { class: "text-[var(--text-secondary)] mb-2",
                        "Drag and drop or browse files"
                    }
                    label {
                        class: "inline-block px-4 py-2 bg-[var(--btn-primary)] 
                                hover:bg-[var(--btn-primary-hover)] rounded cursor-pointer 
                                text-white font-medium transition-colors",
                        input {
                            r#type: "file",
                            accept: ".png,.jpg,.jpeg,.webp,.bmp",
                            class: "hidden",
                            onchange: handle_files,
                        }
                        "Browse Files"
                    }
                    p { class: "mt-4 text-sm text-[var(--text-secondary)]",
                        "Best results with a clear front-facing full-body photo"
                    }
                }
            }
        }
    }
}
