pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |    Content (routed page)     |
/// |   (Left)  |                              |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside class="app-sidebar">
                    <left::Sidebar />
                </aside>

                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
