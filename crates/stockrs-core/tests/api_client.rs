//! Wire-level tests for the API client against a one-shot local responder.
//!
//! Each test spins up a TCP listener that serves exactly one canned HTTP
//! response and hands the raw request back for inspection, so the method,
//! path, auth header, and body the client actually sends are asserted.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use stockrs_core::{ApiClient, ApiError, AuthRequest, NewItem};

/// Serve one request with the given status line and JSON body, returning the
/// client base URL and a channel that yields the raw request text.
fn one_shot(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let port = listener.local_addr().expect("local addr").port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        // Read until the header block is complete, then drain the body by
        // its declared length.
        loop {
            let n = stream.read(&mut buf).expect("read request");
            raw.extend_from_slice(&buf[..n]);
            if let Some(header_end) = find_header_end(&raw) {
                let headers = String::from_utf8_lossy(&raw[..header_end]).to_string();
                let content_length = headers
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                let body_start = header_end + 4;
                while raw.len() < body_start + content_length {
                    let n = stream.read(&mut buf).expect("read body");
                    raw.extend_from_slice(&buf[..n]);
                }
                break;
            }
            if n == 0 {
                break;
            }
        }

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).expect("write response");
        tx.send(String::from_utf8_lossy(&raw).to_string()).ok();
    });

    (format!("http://127.0.0.1:{}/api/", port), rx)
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|w| w == b"\r\n\r\n")
}

#[test]
fn list_items_sends_token_header_and_parses_empty_collection() {
    let (base_url, rx) = one_shot("HTTP/1.1 200 OK", "[]");
    let client = ApiClient::new(&base_url);

    let items = client.list_items("T1").unwrap();
    assert!(items.is_empty());

    let request = rx.recv().unwrap();
    assert!(request.starts_with("GET /api/inventory/ HTTP/1.1"));
    assert!(request.to_lowercase().contains("authorization: token t1"));
}

#[test]
fn create_item_posts_backend_field_names_and_returns_assigned_id() {
    let (base_url, rx) = one_shot(
        "HTTP/1.1 201 Created",
        r#"{"id":7,"name":"Dell XPS","type":"Computer","serialNumber":"SN1","location":"HQ","status":"In Use"}"#,
    );
    let client = ApiClient::new(&base_url);

    let created = client
        .create_item(
            "T1",
            &NewItem {
                name: "Dell XPS".into(),
                item_type: "Computer".into(),
                serial_number: "SN1".into(),
                barcode: None,
                location: "HQ".into(),
                status: "In Use".into(),
            },
        )
        .unwrap();
    assert_eq!(created.id, 7);

    let request = rx.recv().unwrap();
    assert!(request.starts_with("POST /api/inventory/ HTTP/1.1"));
    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["serialNumber"], "SN1");
    assert_eq!(json["type"], "Computer");
    assert!(json.get("id").is_none());
}

#[test]
fn delete_item_targets_the_id_path() {
    let (base_url, rx) = one_shot("HTTP/1.1 204 No Content", "");
    let client = ApiClient::new(&base_url);

    client.delete_item("T1", 7).unwrap();

    let request = rx.recv().unwrap();
    assert!(request.starts_with("DELETE /api/inventory/7/ HTTP/1.1"));
    assert!(request.to_lowercase().contains("authorization: token t1"));
}

#[test]
fn signup_transmits_email_and_role_flags() {
    let (base_url, rx) = one_shot(
        "HTTP/1.1 201 Created",
        r#"{"id":1,"username":"alice","is_admin":false,"token":"T1"}"#,
    );
    let client = ApiClient::new(&base_url);

    let session = client
        .signup(&AuthRequest {
            username: "alice".into(),
            password: "pw".into(),
            is_admin: false,
            is_user: true,
            email: Some("a@x.com".into()),
        })
        .unwrap();
    assert_eq!(session.token, "T1");
    assert!(!session.is_admin);

    let request = rx.recv().unwrap();
    assert!(request.starts_with("POST /api/auth/signup/ HTTP/1.1"));
    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["is_admin"], false);
    assert_eq!(json["is_user"], true);
}

#[test]
fn non_success_status_surfaces_as_error() {
    let (base_url, _rx) = one_shot("HTTP/1.1 401 Unauthorized", r#"{"error":"Invalid credentials"}"#);
    let client = ApiClient::new(&base_url);

    let err = client
        .login(&AuthRequest {
            username: "alice".into(),
            password: "wrong".into(),
            is_admin: false,
            is_user: true,
            email: None,
        })
        .unwrap_err();
    match err {
        ApiError::Status(status) => assert_eq!(status.as_u16(), 401),
        other => panic!("expected status error, got {:?}", other),
    }
}
