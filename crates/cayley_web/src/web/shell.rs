use leptos::prelude::*;

use cayley::{EncodingMode, Theme};

use super::storage::theme_button_id;
use crate::ui_model::{legend, mode_caption};

#[component]
pub(super) fn Topbar(
    theme: ReadSignal<Theme>,
    status: ReadSignal<String>,
    select_theme: Callback<Theme>,
) -> impl IntoView {
    let theme_button = move |t: Theme| {
        // A button is "enabled" when pressing it would change the theme.
        let enabled = move || theme.get() != t;
        view! {
            <button
                id=theme_button_id(t)
                class="btn sm ghost"
                class:enabled=enabled
                aria-pressed=move || if enabled() { "false" } else { "true" }
                title=format!("Theme: {}", t.label())
                on:click=move |_| select_theme.run(t)
            >
                {t.icon()}" "{t.label()}
            </button>
        }
    };

    view! {
        <header class="app-header">
            <div class="app-header-left">
                <h1 class="brand">"Cayley table"</h1>
                <span class="subtle">"4D geometric algebra"</span>
            </div>
            <div class="app-header-right">
                <span class="status">{move || status.get()}</span>
                {theme_button(Theme::Dark)}
                {theme_button(Theme::Light)}
            </div>
        </header>
    }
}

#[component]
pub(super) fn Legend(mode: ReadSignal<EncodingMode>) -> impl IntoView {
    view! {
        <section class="legend">
            <p class="subtle">{move || mode_caption(mode.get())}</p>
            <ul class="legend-swatches">
                {move || {
                    legend(mode.get())
                        .into_iter()
                        .map(|entry| {
                            let style = format!("background: {};", entry.color);
                            view! {
                                <li>
                                    <span class="swatch" style=style></span>
                                    <span>{entry.label}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
