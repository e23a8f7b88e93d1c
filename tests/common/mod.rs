//! Minimal canned-response HTTP server used by the poller tests.
//!
//! No mock-HTTP crate is involved: the server listens on a real loopback
//! socket so the reqwest-based client is exercised end to end. Each path
//! carries a sequence of responses; the last one repeats.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// One route in the fixture table.
pub struct Route {
    pub path: &'static str,
    /// `(status, body)` responses, consumed in order; the last repeats.
    pub responses: Vec<(u16, String)>,
}

impl Route {
    pub fn fixed(path: &'static str, status: u16, body: &str) -> Self {
        Self {
            path,
            responses: vec![(status, body.to_string())],
        }
    }
}

/// Spawns the fixture server and returns its base URL.
pub async fn serve(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture server");
    let addr = listener.local_addr().expect("fixture server address");

    let table: Arc<Mutex<HashMap<&'static str, VecDeque<(u16, String)>>>> = Arc::new(Mutex::new(
        routes
            .into_iter()
            .map(|r| (r.path, r.responses.into_iter().collect()))
            .collect(),
    ));

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let table = Arc::clone(&table);
            tokio::spawn(handle_connection(stream, table));
        }
    });

    format!("http://{addr}")
}

async fn handle_connection(
    mut stream: tokio::net::TcpStream,
    table: Arc<Mutex<HashMap<&'static str, VecDeque<(u16, String)>>>>,
) {
    let mut buf = vec![0u8; 8192];
    let mut read = 0;
    // Read until the end of the request head; GET requests have no body.
    loop {
        match stream.read(&mut buf[read..]).await {
            Ok(0) => break,
            Ok(n) => {
                read += n;
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
                if read == buf.len() {
                    break;
                }
            }
            Err(_) => return,
        }
    }

    let head = String::from_utf8_lossy(&buf[..read]);
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let (status, body) = {
        let mut table = table.lock().expect("route table lock");
        match table.iter_mut().find(|(p, _)| path.starts_with(**p)) {
            Some((_, queue)) if queue.len() > 1 => queue.pop_front().expect("non-empty queue"),
            Some((_, queue)) => queue
                .front()
                .cloned()
                .unwrap_or((404, "{}".to_string())),
            None => (404, "{}".to_string()),
        }
    };

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
