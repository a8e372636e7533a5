use leptos::html::Iframe;
use leptos::{
    component, create_memo, create_node_ref, create_signal, ev, view, CollectView, IntoView,
    SignalGet, SignalGetUntracked, SignalSet, SignalUpdate,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};
use tracing::{debug, warn};
use web_sys::HtmlIFrameElement;

use crate::components::Spinner;
use crate::config::SCENE_LOAD_TIMEOUT_MS;

use super::types::{resolve_scene, scene_asset, SceneSource, SceneState, SCENE_MARKER};

#[component]
pub fn LogisticsScene(asset_id: &'static str) -> impl IntoView {
    let asset = scene_asset(asset_id);
    if asset.is_none() {
        warn!(asset_id, "unknown scene asset, showing fallback");
    }

    let (state, set_state) = create_signal(SceneState::Loading);
    let (is_playing, set_playing) = create_signal(true);
    let (show_info, set_show_info) = create_signal(false);

    let frame_ref = create_node_ref::<Iframe>();

    let UseTimeoutFnReturn {
        start: start_deadline,
        ..
    } = use_timeout_fn(
        move |()| {
            if state.get_untracked() == SceneState::Loading {
                warn!(asset_id, "scene did not load in time, using fallback");
            }
            set_state.update(|state| *state = state.on_timeout());
        },
        SCENE_LOAD_TIMEOUT_MS,
    );
    if asset.is_some_and(|asset| asset.scene_url.is_some()) {
        start_deadline(());
    }

    let on_load = move |_: ev::Event| {
        let has_marker = frame_ref
            .get_untracked()
            .is_some_and(|frame| has_scene_marker(&frame));
        let next = state.get_untracked().on_load(has_marker);

        if next == SceneState::Ready {
            debug!(asset_id, "scene loaded");
        } else {
            warn!(asset_id, "scene page is not a scene, using fallback");
        }
        set_state.set(next);
    };

    let source = create_memo(move |_| resolve_scene(asset, state.get()));
    let source = move || source.get();
    let is_loading = move || matches!(source(), SceneSource::Scene(_)) && state.get() == SceneState::Loading;

    view! {
        <div class="scene relative rounded-lg overflow-hidden">
            {move || match source() {
                SceneSource::Scene(url) => {
                    view! {
                        <iframe
                            class="scene-frame w-full h-full"
                            src=url
                            title=asset.map_or("", |asset| asset.title)
                            node_ref=frame_ref
                            on:load=on_load
                        ></iframe>
                    }
                        .into_view()
                }
                SceneSource::Fallback(elements) => {
                    view! {
                        <div class="scene-fallback flex justify-center items-center gap-4">
                            {elements
                                .iter()
                                .enumerate()
                                .map(|(index, element)| {
                                    view! {
                                        <span class=format!("scene-element element-{index}")>
                                            {*element}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_view()
                }
            }}
            <div class="absolute inset-0 flex justify-center items-center" class:hidden=move || !is_loading()>
                <Spinner />
            </div>
            <div class="absolute inset-0 flex justify-center items-center" class:hidden=move || state.get() != SceneState::Failed>
                "⚠️ Failed to load 3D scene"
            </div>
            <div class="scene-controls absolute bottom-2 right-2 flex gap-2">
                <button
                    class="outline"
                    title=move || if is_playing.get() { "Pause Animation" } else { "Play Animation" }
                    on:click=move |_| set_playing.update(|is_playing| *is_playing = !*is_playing)
                >
                    {move || if is_playing.get() { "⏸" } else { "▶" }}
                </button>
                <button class="outline" title="Toggle Info" on:click=move |_| set_show_info.update(|show| *show = !*show)>
                    "ℹ"
                </button>
            </div>
            <article class="scene-info absolute bottom-12 right-2" class:hidden=move || !show_info.get()>
                <strong>{asset.map_or("Logistics", |asset| asset.title)}</strong>
                <p>{asset.map_or("", |asset| asset.description)}</p>
            </article>
        </div>
    }
}

/// Same-origin check for the marker meta tag, foreign or missing documents have none
fn has_scene_marker(frame: &HtmlIFrameElement) -> bool {
    frame
        .content_document()
        .and_then(|document| {
            document
                .query_selector(&format!("meta[name=\"{SCENE_MARKER}\"]"))
                .ok()
                .flatten()
        })
        .is_some()
}
