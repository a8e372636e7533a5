use leptos::{component, view, IntoView, MaybeSignal, SignalGet};
use leptos_router::A;

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span aria-busy="true">"Loading..."</span> }
}

#[component]
pub fn ProgressBar(#[prop(into)] value: MaybeSignal<f64>) -> impl IntoView {
    view! { <progress class="w-full" value=move || value.get() max="100"></progress> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center p-12">
            <h1>"Not Found"</h1>
            <A href="/">"Back to the home page"</A>
        </div>
    }
}
