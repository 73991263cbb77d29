use futures_util::future::{BoxFuture, FutureExt};
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde_json::Value;

use super::{Upstream, UpstreamBody, UpstreamReply};
use crate::config::UpstreamConfig;
use crate::error::ProxyError;

/// [`Upstream`] over a shared `reqwest` client. One attempt per call, no retry.
pub struct HttpUpstream {
    client: Client,
    config: UpstreamConfig,
}

impl HttpUpstream {
    pub fn new(config: UpstreamConfig) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProxyError::transport(&e))?;
        Ok(Self { client, config })
    }

    async fn read_reply(response: Response) -> Result<UpstreamReply, ProxyError> {
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| ProxyError::transport(&e))?;

        let body = match serde_json::from_slice::<Value>(&bytes) {
            Ok(json) => UpstreamBody::Json(json),
            Err(e) if status.is_success() => return Err(ProxyError::Decode(e.to_string())),
            Err(_) => UpstreamBody::Text(String::from_utf8_lossy(&bytes).into_owned()),
        };

        Ok(UpstreamReply {
            status: status.as_u16(),
            body,
        })
    }
}

impl Upstream for HttpUpstream {
    fn get_json<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<UpstreamReply, ProxyError>> {
        async move {
            let url = self.config.url(path);
            debug!("GET {}", url);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| ProxyError::transport(&e))?;
            Self::read_reply(response).await
        }
        .boxed()
    }

    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<UpstreamReply, ProxyError>> {
        async move {
            let url = self.config.url(path);
            debug!("POST {}", url);
            let response = self
                .client
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .json(body)
                .send()
                .await
                .map_err(|e| ProxyError::transport(&e))?;
            Self::read_reply(response).await
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answers exactly one request with `raw_response` and hands back what the
    /// client sent.
    fn one_shot_server(raw_response: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).unwrap();
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received);
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let length = text[..head_end]
                        .lines()
                        .find_map(|l| {
                            let lower = l.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if received.len() >= head_end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            stream.write_all(raw_response.as_bytes()).unwrap();
            String::from_utf8_lossy(&received).into_owned()
        });
        (base, handle)
    }

    fn upstream(base: &str) -> HttpUpstream {
        HttpUpstream::new(UpstreamConfig::new(base).unwrap()).unwrap()
    }

    #[actix_web::test]
    async fn get_relays_status_and_json() {
        let (base, server) = one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 9\r\nConnection: close\r\n\r\n[{\"a\":1}]",
        );

        let reply = upstream(&base).get_json("/api/missing_persons").await.unwrap();
        assert_eq!(reply, UpstreamReply::json(200, serde_json::json!([{"a": 1}])));

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /api/missing_persons HTTP/1.1"));
    }

    #[actix_web::test]
    async fn post_sends_json_content_type() {
        let (base, server) = one_shot_server(
            "HTTP/1.1 400 Bad Request\r\nContent-Type: application/json\r\nContent-Length: 15\r\nConnection: close\r\n\r\n{\"error\":\"bad\"}",
        );

        let body = serde_json::json!({"name": "Wanjiru"});
        let reply = upstream(&base).post_json("/api/nextofkin/", &body).await.unwrap();
        assert_eq!(reply.status, 400);
        assert!(!reply.is_success());

        let request = server.join().unwrap().to_ascii_lowercase();
        assert!(request.starts_with("post /api/nextofkin/ http/1.1"));
        assert!(request.contains("content-type: application/json"));
        assert!(request.ends_with("{\"name\":\"wanjiru\"}"));
    }

    #[actix_web::test]
    async fn non_json_success_is_a_decode_error() {
        let (base, server) = one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Length: 8\r\nConnection: close\r\n\r\nnot json",
        );

        let err = upstream(&base).get_json("/api/missing_persons").await.unwrap_err();
        assert!(matches!(err, ProxyError::Decode(_)));
        server.join().unwrap();
    }

    #[actix_web::test]
    async fn non_json_failure_keeps_the_text() {
        let (base, server) = one_shot_server(
            "HTTP/1.1 502 Bad Gateway\r\nContent-Length: 11\r\nConnection: close\r\n\r\nbad gateway",
        );

        let reply = upstream(&base).get_json("/api/missing_persons").await.unwrap();
        assert_eq!(reply.status, 502);
        assert_eq!(reply.body, UpstreamBody::Text("bad gateway".to_string()));
        server.join().unwrap();
    }

    #[actix_web::test]
    async fn unreachable_service_is_a_transport_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = upstream(&format!("http://127.0.0.1:{}", port))
            .get_json("/api/missing_persons")
            .await
            .unwrap_err();
        assert!(matches!(err, ProxyError::Transport(_)));
    }
}
