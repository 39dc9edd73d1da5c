//! Shared utilities for integration testing against a mock ledger node.

use serde_json::{json, Value};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use bifrost_connector::config::LedgerConfig;

/// A JSON-RPC call as received by the mock node.
#[derive(Debug, Clone)]
pub struct MockRequest {
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub id: Value,
    pub method: String,
    pub params: Value,
}

impl MockRequest {
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// How the mock node answers a call.
#[allow(dead_code)]
pub enum Reply {
    Result(Value),
    Error(i64, &'static str),
    Status(u16, &'static str),
    Hang,
}

/// Config pointing at a mock node.
#[allow(dead_code)]
pub fn ledger_config(addr: SocketAddr) -> LedgerConfig {
    LedgerConfig {
        endpoint: format!("http://{}/", addr),
        system_proxy: false,
        ..LedgerConfig::default()
    }
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn dead_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Start a programmable mock node on an ephemeral port.
pub async fn start_mock_node<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(MockRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Reply> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request(&mut socket).await else {
                            return;
                        };
                        let id = request.id.clone();

                        let (status_text, body) = match f(request).await {
                            Reply::Result(result) => (
                                "200 OK",
                                json!({ "jsonrpc": "2.0", "id": id, "result": result }).to_string(),
                            ),
                            Reply::Error(code, message) => (
                                "200 OK",
                                json!({
                                    "jsonrpc": "2.0",
                                    "id": id,
                                    "error": { "code": code, "message": message }
                                })
                                .to_string(),
                            ),
                            Reply::Status(status, body) => {
                                let status_text = match status {
                                    400 => "400 Bad Request",
                                    404 => "404 Not Found",
                                    503 => "503 Service Unavailable",
                                    _ => "500 Internal Server Error",
                                };
                                (status_text, body.to_string())
                            }
                            Reply::Hang => {
                                std::future::pending::<()>().await;
                                unreachable!()
                            }
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock Bifrost node answering `chainInfo` and minting sequential tx hashes.
#[allow(dead_code)]
pub async fn start_healthy_node() -> SocketAddr {
    let issued = Arc::new(std::sync::atomic::AtomicU64::new(0));
    start_mock_node(move |req| {
        let issued = issued.clone();
        async move {
            match req.method.as_str() {
                "chainInfo" => Reply::Result(json!({
                    "height": 4210,
                    "bestBlockId": "29tZmock",
                    "score": 77
                })),
                "createAssets" => {
                    let n = issued.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                    Reply::Result(json!({ "txHash": format!("tx-{}", n), "fee": 0 }))
                }
                _ => Reply::Error(-32601, "Method not found"),
            }
        }
    })
    .await
}

async fn read_request(socket: &mut TcpStream) -> Option<MockRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let path = lines.next()?.split_whitespace().nth(1)?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| {
            let (k, v) = line.split_once(':')?;
            Some((k.trim().to_string(), v.trim().to_string()))
        })
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body: Value = serde_json::from_slice(&buf[body_start..body_start + content_length]).ok()?;

    Some(MockRequest {
        path,
        headers,
        id: body["id"].clone(),
        method: body["method"].as_str().unwrap_or_default().to_string(),
        params: body["params"].clone(),
    })
}
