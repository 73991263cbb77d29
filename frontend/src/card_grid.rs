use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Fixed-column grid holding the record cards of one page.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             gap: 1rem;",
            props.columns
        );

        html! {
            <div class="card-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
