use leptos::{component, create_signal, view, CollectView, IntoView, SignalGet, SignalSet, SignalUpdate};
use leptos_router::{use_navigate, NavigateOptions};
use tracing::info;

use super::route::role_switch_target;
use super::types::Role;

#[component]
pub fn RoleSwitcher(current: Role) -> impl IntoView {
    let (is_open, set_open) = create_signal(false);
    let navigate = use_navigate();

    let select = move |role: Role| {
        if let Some(path) = role_switch_target(current, role) {
            info!(from = %current, to = %role, "switching role");
            navigate(&path, NavigateOptions::default());
        }
        set_open.set(false);
    };

    let options = Role::ALL
        .into_iter()
        .map(|role| {
            let select = select.clone();
            let profile = role.profile();
            let is_current = role == current;

            view! {
                <li>
                    <button
                        class="w-full text-left p-3 rounded-lg"
                        class:bg-gray-100=is_current
                        on:click=move |_| select(role)
                    >
                        <span class=format!("role-icon role-{}", role.config().theme.color)>
                            {role.config().icon}
                        </span>
                        <strong>{profile.label}</strong>
                        {is_current.then_some(" ✓")}
                        <small class="block text-gray-500">{profile.summary}</small>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="relative">
            <button class="outline" on:click=move |_| set_open.update(|is_open| *is_open = !*is_open)>
                {current.config().icon}
                " "
                {current.profile().label}
                <span class:rotate-180=move || is_open.get()>" ▾"</span>
            </button>
            <ul
                class="absolute top-full left-0 mt-2 w-64 z-50 shadow-lg bg-white rounded-lg"
                class:hidden=move || !is_open.get()
            >
                {options}
            </ul>
        </div>
    }
}
