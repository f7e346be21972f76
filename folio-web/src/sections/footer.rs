use leptos::prelude::*;

#[component]
pub fn Footer(text: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{text}</p>
        </footer>
    }
}
