//! Login form transitions.
//!
//! One attempt per submit. While the call is in flight further submits are
//! ignored and the button is disabled. On success both session hints are
//! written, "Login successful!" stays up for two seconds and the browser moves
//! to the verification page of the returned role. On failure the error banner
//! shows at once and the form stays put. Timers carry the attempt that
//! started them, so a late timer from an earlier attempt changes nothing.

use common::session::{ERROR_BANNER_MS, SUCCESS_REDIRECT_MS};
use gloo_console::{error, log};
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LoginComponent;
use crate::api::post_login;
use crate::navigation::{encode_uri_component, navigate, write_cookie};

pub fn update(component: &mut LoginComponent, ctx: &Context<LoginComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateCode(code) => {
            component.generated_code = code;
            true
        }
        Msg::UpdatePhone(phone) => {
            component.phone_number = phone;
            true
        }
        Msg::Submit => {
            if !component.flow.submit() {
                return false;
            }

            let request = component.request();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = post_login(&request).await;
                link.send_message(Msg::Finished(result));
            });
            true
        }
        Msg::Finished(result) => {
            let attempt = component.flow.finish(&result);
            let link = ctx.link().clone();

            match result {
                Ok(session) => {
                    log!(format!("Logged in as {:?}", session.role));
                    for assignment in session.cookie_assignments(encode_uri_component) {
                        write_cookie(&assignment);
                    }

                    let role = session.role;
                    wasm_bindgen_futures::spawn_local(async move {
                        TimeoutFuture::new(SUCCESS_REDIRECT_MS).await;
                        link.send_message(Msg::Redirect { role, attempt });
                    });
                }
                Err(e) => {
                    error!(format!("Error during login: {}", e));
                    wasm_bindgen_futures::spawn_local(async move {
                        TimeoutFuture::new(ERROR_BANNER_MS).await;
                        link.send_message(Msg::ClearBanner(attempt));
                    });
                }
            }
            true
        }
        Msg::Redirect { role, attempt } => {
            if !component.flow.clear(attempt) {
                return false;
            }
            navigate(role.verification_route());
            true
        }
        Msg::ClearBanner(attempt) => component.flow.clear(attempt),
    }
}
