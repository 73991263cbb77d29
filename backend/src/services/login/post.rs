use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::requests::LoginRequest;
use common::session::{Role, Session};
use log::{error, info};
use serde_json::Value;

use crate::error::ProxyError;
use crate::services::relay::{relay, UPSTREAM_STATUS_HEADER};
use crate::upstream::{Upstream, UpstreamBody};

const UPSTREAM_PATH: &str = "/api/login/";

pub async fn process(
    payload: web::Json<LoginRequest>,
    upstream: web::Data<dyn Upstream>,
) -> Result<HttpResponse, ProxyError> {
    let request = payload.into_inner();
    info!("Login attempt for code {}", request.generated_code);

    let body = serde_json::to_value(&request).map_err(|e| ProxyError::InvalidBody(e.to_string()))?;
    let reply = upstream
        .post_json(UPSTREAM_PATH, &body)
        .await
        .inspect_err(|e| error!("Login request failed: {}", e))?;

    if !reply.is_success() {
        info!("Login refused with upstream status {}", reply.status);
        return Ok(relay(reply, StatusCode::OK));
    }

    let session = match &reply.body {
        UpstreamBody::Json(json) if accepts(json) => session_from_reply(&request, json),
        UpstreamBody::Json(json) => {
            error!("Login reply carries no session: {}", json);
            return Err(ProxyError::Decode(format!("login not accepted: {}", json)));
        }
        UpstreamBody::Text(text) => return Err(ProxyError::Decode(text.clone())),
    };

    Ok(HttpResponse::Ok()
        .insert_header((UPSTREAM_STATUS_HEADER, reply.status.to_string()))
        .json(session))
}

/// A 2xx reply only counts as a login when its body is truthy; `null`,
/// `false`, `0` and `""` do not.
fn accepts(body: &Value) -> bool {
    match body {
        Value::Null => false,
        Value::Bool(accepted) => *accepted,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Fields the service echoes back win over what was submitted. The role comes
/// from the service when it names one, and from the code otherwise.
fn session_from_reply(request: &LoginRequest, body: &Value) -> Session {
    let generated_code = text_field(body, "generated_code").unwrap_or(request.generated_code.as_str());
    let phone_number = text_field(body, "phone_number").unwrap_or(request.phone_number.as_str());
    let role = text_field(body, "role")
        .and_then(Role::parse)
        .unwrap_or_else(|| Role::from_generated_code(&request.generated_code));

    Session {
        generated_code: generated_code.to_string(),
        phone_number: phone_number.to_string(),
        role,
    }
}

fn text_field<'a>(body: &'a Value, name: &str) -> Option<&'a str> {
    body.get(name)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::App;
    use serde_json::json;

    use crate::services::configure;
    use crate::services::testing::{shared, JSON_LIMIT};
    use crate::upstream::scripted::{Call, ScriptedUpstream};
    use crate::upstream::UpstreamReply;

    fn login(code: &str) -> LoginRequest {
        LoginRequest {
            generated_code: code.to_string(),
            phone_number: "0743264217".to_string(),
        }
    }

    #[test]
    fn role_falls_back_to_the_code_prefix() {
        let session = session_from_reply(&login("Po1234"), &json!({"message": "ok"}));
        assert_eq!(session.role, Role::Police);
        assert_eq!(session.generated_code, "Po1234");

        let session = session_from_reply(&login("M001"), &json!(true));
        assert_eq!(session.role, Role::Mortuary);
        assert_eq!(session.phone_number, "0743264217");
    }

    #[test]
    fn only_truthy_replies_are_accepted() {
        assert!(accepts(&json!(true)));
        assert!(accepts(&json!({})));
        assert!(accepts(&json!({"message": "ok"})));
        assert!(!accepts(&json!(null)));
        assert!(!accepts(&json!(false)));
        assert!(!accepts(&json!(0)));
        assert!(!accepts(&json!("")));
    }

    #[test]
    fn explicit_role_wins() {
        let session = session_from_reply(
            &login("Po1234"),
            &json!({"generated_code": "Po1234", "phone_number": "0700000000", "role": "mortuary"}),
        );
        assert_eq!(session.role, Role::Mortuary);
        assert_eq!(session.phone_number, "0700000000");
    }

    #[actix_web::test]
    async fn successful_login_answers_with_a_session() {
        let upstream = ScriptedUpstream::replying(UpstreamReply::json(
            200,
            json!({"generated_code": "Po1234", "phone_number": "0743264217"}),
        ));
        let app = actix_test::init_service(
            App::new().configure(|cfg| configure(cfg, shared(&upstream), JSON_LIMIT)),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/login")
            .set_json(login("Po1234"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let session: Session = actix_test::read_body_json(resp).await;
        assert_eq!(session.role, Role::Police);
        assert_eq!(session.role.verification_route(), "/police/otpVerification");
        assert_eq!(
            upstream.calls(),
            vec![Call::Post(
                "/api/login/".to_string(),
                json!({"generated_code": "Po1234", "phone_number": "0743264217"})
            )]
        );
    }

    #[actix_web::test]
    async fn refused_login_keeps_the_upstream_status() {
        let upstream = ScriptedUpstream::replying(UpstreamReply::json(
            401,
            json!({"detail": "Invalid code"}),
        ));
        let app = actix_test::init_service(
            App::new().configure(|cfg| configure(cfg, shared(&upstream), JSON_LIMIT)),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/login")
            .set_json(login("M001"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({"detail": "Invalid code"}));
    }

    #[actix_web::test]
    async fn unreachable_service_answers_500() {
        let upstream = ScriptedUpstream::failing(ProxyError::Transport("ECONNREFUSED".to_string()));
        let app = actix_test::init_service(
            App::new().configure(|cfg| configure(cfg, shared(&upstream), JSON_LIMIT)),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/login")
            .set_json(login("M001"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(actix_test::read_body(resp).await, "ECONNREFUSED");
    }

    #[actix_web::test]
    async fn falsy_success_reply_is_not_a_login() {
        for body in [json!(null), json!(false)] {
            let upstream = ScriptedUpstream::replying(UpstreamReply::json(200, body));
            let app = actix_test::init_service(
                App::new().configure(|cfg| configure(cfg, shared(&upstream), JSON_LIMIT)),
            )
            .await;

            let req = actix_test::TestRequest::post()
                .uri("/api/login")
                .set_json(login("Po1234"))
                .to_request();
            let resp = actix_test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
