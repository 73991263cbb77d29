use common::routes::Page;
use yew::{html, Component, Context, Html};

use crate::components::login::LoginComponent;
use crate::components::records::RecordsDashboard;
use crate::navigation::current_path;

/// Picks the page from the browser location once, at mount.
pub struct App {
    page: Page,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::from_path(&current_path()),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match self.page {
            Page::Login => html! { <LoginComponent /> },
            Page::Records(kind) => html! { <RecordsDashboard {kind} /> },
            Page::NotFound => html! {
                <main class="page-main">
                    <p>{ "Page not found." }</p>
                </main>
            },
        }
    }
}
