//! View rendering for the record dashboard.
//!
//! Layout: title, date search plus "+ Add Data", then exactly one of
//! "Loading...", the fetch error, "Not Found." or the card grid with its
//! Previous / Next controls.

use common::listing::ListPage;
use common::model::card::RecordCard;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RecordsDashboard;
use crate::api::FetchState;
use crate::card_grid::CardGrid;
use crate::navigation::today_iso;

const GRID_COLUMNS: usize = 3;

pub fn view(component: &RecordsDashboard, ctx: &Context<RecordsDashboard>) -> Html {
    let link = ctx.link();
    let kind = ctx.props().kind;

    html! {
        <div class="dashboard-root">
            <header class="page-header">
                <h1>{ kind.title() }</h1>
            </header>
            <main class="page-main">
                <section>
                    { build_toolbar(component, link) }
                    { build_results(component, link) }
                </section>
            </main>
        </div>
    }
}

fn build_toolbar(component: &RecordsDashboard, link: &Scope<RecordsDashboard>) -> Html {
    let on_search = link.callback(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        Msg::SetSearchTerm(input.value())
    });

    html! {
        <div class="toolbar">
            <input
                type="date"
                class="search-input"
                placeholder="Search by Date..."
                value={component.list.search_term.clone()}
                max={today_iso()}
                oninput={on_search}
            />
            <button class="btn btn-primary" onclick={link.callback(|_| Msg::AddData)}>
                { "+ Add Data" }
            </button>
        </div>
    }
}

/// Loading and error states take precedence over the grid.
fn build_results(component: &RecordsDashboard, link: &Scope<RecordsDashboard>) -> Html {
    match &component.fetch {
        FetchState::Loading => html! { <p>{ "Loading..." }</p> },
        FetchState::Failed(message) => html! { <p>{ message.clone() }</p> },
        FetchState::Ready(cards) => {
            let page = component.list.derive(cards);
            if page.is_empty() {
                html! { <p>{ "Not Found." }</p> }
            } else {
                html! {
                    <>
                        <CardGrid columns={GRID_COLUMNS}>
                            { for page.items.iter().copied().map(record_card) }
                        </CardGrid>
                        { build_pagination(&page, link) }
                    </>
                }
            }
        }
    }
}

fn build_pagination(page: &ListPage<'_, RecordCard>, link: &Scope<RecordsDashboard>) -> Html {
    html! {
        <div class="pagination">
            <button
                class="btn btn-primary"
                disabled={page.previous_disabled()}
                onclick={link.callback(|_| Msg::PreviousPage)}
            >
                { "Previous" }
            </button>
            <span>{ page.label() }</span>
            <button
                class="btn btn-primary"
                disabled={page.next_disabled()}
                onclick={link.callback(|_| Msg::NextPage)}
            >
                { "Next" }
            </button>
        </div>
    }
}

fn record_card(card: &RecordCard) -> Html {
    html! {
        <div class="card" data-record-id={card.id.clone()}>
            <div class="card-avatar">{ "\u{1F464}" }</div>
            {
                for card.fields.iter().map(|field| html! {
                    <p><strong>{ format!("{}:", field.label) }</strong>{ " " }{ field.value.clone() }</p>
                })
            }
        </div>
    }
}
