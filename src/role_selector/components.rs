use leptos::{component, create_signal, view, CollectView, IntoView, SignalGet, SignalSet};
use leptos_router::{use_navigate, NavigateOptions, A};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};
use tracing::info;

use crate::config::ROLE_SELECT_DELAY_MS;
use crate::role::route::role_selection;
use crate::role::{dashboard_path, Role};

#[component]
pub fn RoleSelector() -> impl IntoView {
    let (selected, set_selected) = create_signal(None::<Role>);
    let navigate = use_navigate();

    // cleared when the selector unmounts before the delay elapses
    let UseTimeoutFnReturn {
        start: open_dashboard,
        ..
    } = use_timeout_fn(
        move |role: Role| navigate(&dashboard_path(role), NavigateOptions::default()),
        ROLE_SELECT_DELAY_MS,
    );

    let choose = move |role: Role| {
        let Some(role) = role_selection(selected.get(), role) else {
            return;
        };

        info!(%role, "role selected");
        set_selected.set(Some(role));
        open_dashboard(role);
    };

    view! {
        <div class="p-6 space-y-8">
            <header class="text-center">
                <A href="/">"← Back"</A>
                <h1>"Choose your perspective"</h1>
                <p class="text-gray-600">"Every role sees the journey differently"</p>
            </header>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {Role::ALL
                    .into_iter()
                    .map(|role| {
                        let choose = choose.clone();
                        let profile = role.profile();
                        let theme = role.config().theme;
                        let is_selected = move || selected.get() == Some(role);

                        view! {
                            <article
                                class=move || {
                                    let ring = if is_selected() { format!("ring-4 {}", theme.ring) } else { String::new() };
                                    format!("cursor-pointer {ring}")
                                }
                                on:click=move |_| choose(role)
                            >
                                <img src=profile.image alt=profile.title class="rounded-lg w-full h-40 object-cover" />
                                <header>
                                    <h3>{role.config().icon} " " {profile.title}</h3>
                                    <p class="text-sm text-gray-500">{profile.subtitle}</p>
                                </header>
                                <p>{profile.description}</p>
                                <ul class="text-sm">
                                    {profile.features.into_iter().map(|feature| view! { <li>"✓ " {feature}</li> }).collect_view()}
                                </ul>
                                <button class=format!("w-full bg-gradient-to-r {}", theme.gradient)>
                                    {move || if is_selected() { "Opening dashboard..." } else { "Select" }}
                                </button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
