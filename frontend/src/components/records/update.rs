use yew::prelude::*;

use super::messages::Msg;
use super::state::RecordsDashboard;
use crate::navigation::navigate;

/// Applies `msg` to the dashboard and reports whether to re-render.
pub fn update(component: &mut RecordsDashboard, ctx: &Context<RecordsDashboard>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(result) => {
            component.request = None;
            component.fetch = result.into();
            true
        }
        Msg::SetSearchTerm(term) => component.list.set_search_term(term),
        Msg::NextPage => {
            let total_pages = component.total_pages();
            component.list.next_page(total_pages)
        }
        Msg::PreviousPage => component.list.previous_page(),
        Msg::AddData => {
            navigate(ctx.props().kind.add_form_route());
            false
        }
    }
}
