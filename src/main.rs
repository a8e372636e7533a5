#![deny(clippy::all, clippy::pedantic)]
#![allow(non_snake_case, clippy::module_name_repetitions)]

use leptos::{component, view, IntoView};
use leptos_router::{Route, Router, Routes, A};
use wasm_tracing::WASMLayerConfigBuilder;

use crate::components::NotFound;
use crate::config::{LOG_LEVEL, ROLE_SELECTOR_PATH};
use crate::dashboard::Dashboard;
use crate::home::Home;
use crate::role_selector::RoleSelector;

mod components;
mod config;
mod dashboard;
mod data;
mod datetime;
mod format;
mod home;
mod network;
mod role;
mod role_selector;
mod route_map;
mod scene;
mod story;
mod telemetry;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(LOG_LEVEL)
            .build(),
    );
    leptos::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <main class="container-fluid">
            <Router>
                <nav>
                    <ul>
                        <li>
                            <strong>
                                <A href="/">"Waybill"</A>
                            </strong>
                        </li>
                    </ul>
                    <ul>
                        <li>
                            <A href=ROLE_SELECTOR_PATH>"Choose a role"</A>
                        </li>
                    </ul>
                </nav>
                <div class="h-full w-full overflow-auto">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path=ROLE_SELECTOR_PATH view=RoleSelector />
                        <Route path="/dashboard/:role" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </div>
            </Router>
        </main>
    }
}
