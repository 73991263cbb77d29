//! Record dashboard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `RecordsProps`, `RecordsDashboard`).
//! - On first render, fetch the records of the configured kind through the
//!   backend proxy. The request is tied to an abort guard held in the state,
//!   so unmounting the dashboard cancels it and a late answer is dropped.

use common::model::card::{RecordCard, ToCard};
use common::model::missing_person::MissingPerson;
use common::model::unidentified_body::UnidentifiedBody;
use common::routes::RecordKind;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_json, AbortGuard, FetchError};

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RecordsProps;
pub use state::RecordsDashboard;

impl Component for RecordsDashboard {
    type Message = Msg;
    type Properties = RecordsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RecordsDashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let guard = AbortGuard::new();
            let signal = guard.signal();
            self.request = Some(guard);

            let kind = ctx.props().kind;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = load_cards(kind, signal.as_ref()).await;
                if signal.as_ref().is_some_and(|s| s.aborted()) {
                    return;
                }
                if let Err(e) = &result {
                    error!(format!("Loading {} failed: {}", kind.title(), e));
                }
                link.send_message(Msg::Loaded(result));
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // dropping the guard aborts a request that is still running
        self.request = None;
    }
}

async fn load_cards(
    kind: RecordKind,
    signal: Option<&web_sys::AbortSignal>,
) -> Result<Vec<RecordCard>, FetchError> {
    match kind {
        RecordKind::UnidentifiedBodies => {
            let bodies: Vec<UnidentifiedBody> = fetch_json(kind.api_path(), signal).await?;
            Ok(to_cards(&bodies))
        }
        RecordKind::MissingPersons => {
            let people: Vec<MissingPerson> = fetch_json(kind.api_path(), signal).await?;
            Ok(to_cards(&people))
        }
    }
}

fn to_cards<T: ToCard>(records: &[T]) -> Vec<RecordCard> {
    records.iter().map(ToCard::to_card).collect()
}
