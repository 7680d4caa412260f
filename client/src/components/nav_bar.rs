//! Top navigation bar: brand, route links, dark-mode toggle, mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

/// One navigation entry: route path and label.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/blue", "Ford Blue"),
    ("/model-e", "Model e"),
    ("/pro", "Ford Pro"),
    ("/frameworks", "Frameworks"),
    ("/story", "Story"),
];

/// Sticky header with route links and the theme toggle.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let is_active = move |path: &str| location.pathname.get() == path;

    let on_toggle_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_toggle_menu = move |_| {
        ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open);
    };

    view! {
        <header class="nav-bar">
            <div class="nav-bar__inner">
                <A href="/" attr:class="nav-bar__brand">
                    <span class="nav-bar__logo">"F"</span>
                    <span class="nav-bar__title">"Ford Strategy"</span>
                    <span class="nav-bar__course">"DSCI-5330"</span>
                </A>

                <nav class="nav-bar__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(path, label)| {
                            view! {
                                <A
                                    href=path
                                    attr:class=move || {
                                        if is_active(path) {
                                            "nav-bar__link nav-bar__link--active"
                                        } else {
                                            "nav-bar__link"
                                        }
                                    }
                                >
                                    {label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="nav-bar__actions">
                    <button
                        class="btn nav-bar__theme-toggle"
                        on:click=on_toggle_theme
                        aria-label="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <button class="btn nav-bar__menu-toggle" on:click=on_toggle_menu>
                        {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || ui.get().mobile_menu_open>
                <nav class="nav-bar__mobile">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(path, label)| {
                            view! {
                                <A
                                    href=path
                                    attr:class="nav-bar__mobile-link"
                                    on:click=move |_| ui.update(|u| u.mobile_menu_open = false)
                                >
                                    {label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </Show>
        </header>
    }
}
