use common::session::Banner;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LoginComponent;

pub fn view(component: &LoginComponent, ctx: &Context<LoginComponent>) -> Html {
    let link = ctx.link();
    let submitting = component.flow.is_submitting();

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="login-root">
            <div class="login-brand">{ "Lost Locate" }</div>
            <div class="login-panel">
                <h2>{ "LOGIN" }</h2>
                <form class="login-form" onsubmit={on_submit}>
                    { text_field("generated_code", "Enter code:", "1234", &component.generated_code,
                        link.callback(|value| Msg::UpdateCode(value))) }
                    { text_field("phone_number", "Enter Phone Number:", "0743264217", &component.phone_number,
                        link.callback(|value| Msg::UpdatePhone(value))) }
                    { component.flow.banner().map(banner).unwrap_or_default() }
                    <button
                        type="submit"
                        class={classes!("login-submit", submitting.then_some("busy"))}
                        disabled={submitting}
                    >
                        { if submitting { "Logging in..." } else { "Login" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

fn text_field(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    on_change: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value());
    });

    html! {
        <div>
            <label for={id}>{ label }</label>
            <input
                type="text"
                id={id}
                value={value.to_string()}
                placeholder={placeholder}
                required=true
                {oninput}
            />
        </div>
    }
}

fn banner(banner: Banner) -> Html {
    let class = match banner {
        Banner::Success => "banner banner-success",
        Banner::Failure => "banner banner-failure",
    };
    html! { <div class={class}>{ banner.message() }</div> }
}
