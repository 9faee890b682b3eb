//! Tests de integración para el servidor de archivos estáticos
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor sobre un puerto efímero y le habla
//! por sockets reales, así que `cargo test` corre sin pasos manuales.

use static_server::config::Config;
use static_server::server::Server;
use std::fs;
use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Helper: levanta un servidor sobre un puerto efímero y retorna su dirección
fn start_server(pool_size: usize) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind efímero");
    let addr = listener.local_addr().unwrap();

    let mut config = Config::default();
    config.pool_size = pool_size;

    let mut server = Server::new(config);
    thread::spawn(move || {
        let _ = server.serve(listener);
    });

    addr
}

/// Helper: manda bytes crudos y retorna todo lo que el servidor respondió
fn send_raw(addr: SocketAddr, payload: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");

    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    stream
        .set_write_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    stream.write_all(payload).unwrap();
    stream.flush().unwrap();
    stream.shutdown(Shutdown::Write).unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();

    response
}

/// Helper: envía un GET y retorna la response completa como bytes
fn send_request(addr: SocketAddr, path: &str) -> Vec<u8> {
    send_raw(addr, format!("GET {} HTTP/1.1\r\n\r\n", path).as_bytes())
}

/// Helper: separa (head, body) en el primer \r\n\r\n
fn split_response(response: &[u8]) -> (String, Vec<u8>) {
    let pos = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response sin separador de headers");

    (
        String::from_utf8_lossy(&response[..pos + 4]).to_string(),
        response[pos + 4..].to_vec(),
    )
}

#[test]
fn test_all_whitelisted_paths_return_200() {
    let addr = start_server(4);

    let paths = [
        "/index.html",
        "/spring.svg",
        "/spring.png",
        "/resources.html",
        "/styles.css",
        "/app.js",
        "/links.html",
        "/forms.html",
        "/classic.html",
        "/events.html",
        "/events.js",
    ];

    for path in paths {
        let response = send_request(addr, path);
        let (head, _) = split_response(&response);

        assert!(
            head.starts_with("HTTP/1.1 200 OK\r\n"),
            "{} debería ser 200, head: {}",
            path,
            head
        );
        assert!(head.contains("Connection: close\r\n"));
    }
}

#[test]
fn test_styles_css_served_byte_for_byte() {
    let addr = start_server(4);

    let response = send_request(addr, "/styles.css");
    let (head, body) = split_response(&response);
    let on_disk = fs::read("./public/styles.css").unwrap();

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: text/css\r\n"));
    assert!(head.contains(&format!("Content-Length: {}\r\n", on_disk.len())));
    assert_eq!(body, on_disk);
}

#[test]
fn test_binary_file_served_byte_for_byte() {
    let addr = start_server(4);

    let response = send_request(addr, "/spring.png");
    let (head, body) = split_response(&response);
    let on_disk = fs::read("./public/spring.png").unwrap();

    assert!(head.contains("Content-Type: image/png\r\n"));
    assert!(head.contains(&format!("Content-Length: {}\r\n", on_disk.len())));
    assert_eq!(body, on_disk);
}

#[test]
fn test_content_length_matches_body_exactly() {
    let addr = start_server(4);

    for path in ["/index.html", "/app.js", "/spring.svg"] {
        let response = send_request(addr, path);
        let (head, body) = split_response(&response);

        assert!(
            head.contains(&format!("Content-Length: {}\r\n", body.len())),
            "{}: Content-Length no coincide con el body ({} bytes)",
            path,
            body.len()
        );
    }
}

#[test]
fn test_not_found_exact_response() {
    let addr = start_server(4);

    for path in ["/nonexistent.html", "/", "/../etc/passwd", "/styles.css?v=2"] {
        let response = send_request(addr, path);

        assert_eq!(
            response,
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            "{} debería ser el 404 exacto",
            path
        );
    }
}

#[test]
fn test_malformed_request_closes_silently() {
    let addr = start_server(4);

    // Menos de 3 tokens, más de 3 tokens, línea vacía
    for payload in [&b"GET\r\n"[..], &b"GET /a b HTTP/1.1\r\n"[..], &b"\r\n"[..]] {
        let response = send_raw(addr, payload);

        assert!(
            response.is_empty(),
            "request malformado debería cerrar con cero bytes, recibió {}",
            response.len()
        );
    }
}

#[test]
fn test_classic_html_substitutes_time_token() {
    let addr = start_server(4);

    let template_on_disk = fs::read_to_string("./public/classic.html").unwrap();
    assert!(
        template_on_disk.contains("{time}"),
        "el fixture debe contener el token"
    );

    let response = send_request(addr, "/classic.html");
    let (head, body) = split_response(&response);
    let body_text = String::from_utf8(body.clone()).unwrap();

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: text/html\r\n"));
    assert!(!body_text.contains("{time}"));
    assert!(head.contains(&format!("Content-Length: {}\r\n", body.len())));
}

#[test]
fn test_non_template_request_is_idempotent() {
    let addr = start_server(4);

    let first = send_request(addr, "/app.js");
    let second = send_request(addr, "/app.js");

    assert_eq!(first, second);
}

#[test]
fn test_concurrent_requests_beyond_pool_size() {
    // Más requests simultáneos que workers: todos deben recibir una
    // response correcta y sin bytes entremezclados
    let pool_size = 2;
    let addr = start_server(pool_size);

    let expected = fs::read("./public/styles.css").unwrap();
    let mut handles = Vec::new();

    for _ in 0..8 {
        handles.push(thread::spawn(move || send_request(addr, "/styles.css")));
    }

    for handle in handles {
        let response = handle.join().expect("cliente sin panic");
        let (head, body) = split_response(&response);

        assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
        assert_eq!(body, expected);
    }
}

#[test]
fn test_connection_serves_single_response() {
    let addr = start_server(4);

    // Dos request lines en la misma conexión: solo la primera se procesa,
    // después el servidor cierra
    let response = send_raw(
        addr,
        b"GET /app.js HTTP/1.1\r\nGET /styles.css HTTP/1.1\r\n\r\n",
    );
    let (head, body) = split_response(&response);
    let on_disk = fs::read("./public/app.js").unwrap();

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body, on_disk);
}
