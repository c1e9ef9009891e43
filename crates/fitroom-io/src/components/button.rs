//! Stateless styled button.
//!
//! Pure rendering: variant, size, full-width, disabled, and loading
//! props map to classes; the click event is forwarded to the caller's
//! handler unless the control is disabled or loading. No internal
//! state.

use dioxus::prelude::*;

/// Visual style category for a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled accent button.
    #[default]
    Primary,
    /// Bordered button on a transparent background.
    Outline,
}

impl ButtonVariant {
    /// Classes for this variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] text-white"
            }
            Self::Outline => {
                "border border-[var(--border-accent)] text-[var(--text-accent)] 
                 hover:bg-[var(--surface-active)]"
            }
        }
    }
}

/// Size step for a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Compact.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Prominent.
    Lg,
}

impl ButtonSize {
    /// Padding and text classes for this size.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1 text-sm",
            Self::Md => "px-4 py-2",
            Self::Lg => "px-6 py-3 text-lg",
        }
    }
}

/// Props for the [`Button`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Visual style. Defaults to [`ButtonVariant::Primary`].
    #[props(default)]
    variant: ButtonVariant,
    /// Size step. Defaults to [`ButtonSize::Md`].
    #[props(default)]
    size: ButtonSize,
    /// Stretch to the container's full width.
    #[props(default = false)]
    full_width: bool,
    /// Disable the control.
    #[props(default = false)]
    disabled: bool,
    /// Show a spinner and ignore clicks while a caller-side operation
    /// is in flight.
    #[props(default = false)]
    loading: bool,
    /// Click handler; not called while disabled or loading.
    onclick: EventHandler<MouseEvent>,
    /// Button content.
    children: Element,
}

/// A clickable control with no business logic of its own.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let inert = props.disabled || props.loading;
    let width_class = if props.full_width { "w-full" } else { "" };
    let inert_class = if inert {
        "opacity-50 cursor-not-allowed"
    } else {
        "cursor-pointer"
    };

    rsx! {
        button {
            class: "inline-flex items-center justify-center rounded-md font-semibold 
                    transition-colors {props.variant.class()} {props.size.class()} 
                    {width_class} {inert_class}",
            disabled: inert,
            onclick: move |evt| {
                if !inert {
                    props.onclick.call(evt);
                }
            },

            if props.loading {
                span { class: "animate-spin mr-2 w-4 h-4 border-2 border-current 
                               border-t-transparent rounded-full" }
            }
            {props.children}
        }
    }
}
