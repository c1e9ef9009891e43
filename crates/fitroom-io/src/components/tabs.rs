//! Source-selection tab bar.

use dioxus::prelude::*;
use fitroom_core::Tab;

/// Props for the [`TabBar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    /// The active tab.
    active: Tab,
    /// Callback fired when a tab is clicked.
    on_select: EventHandler<Tab>,
}

/// Horizontal tab bar switching between the model picker and the
/// photo upload panel.
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    rsx! {
        div { class: "flex border-b border-[var(--border)] mb-6",

            for tab in Tab::ALL {
                {render_tab(tab, props.active == tab, &props.on_select)}
            }
        }
    }
}

/// Render a single tab control.
fn render_tab(tab: Tab, is_active: bool, on_select: &EventHandler<Tab>) -> Element {
    let class = if is_active {
        "py-3 px-4 font-medium text-[var(--text-accent)] border-b-2 border-[var(--border-accent)]"
    } else {
        "py-3 px-4 font-medium text-[var(--text-secondary)] hover:text-[var(--text)]"
    };

    let onclick = {
        let on_select = *on_select;
        move |_| on_select.call(tab)
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "aria-pressed": "{is_active}",
            "{tab.label()}"
        }
    }
}
