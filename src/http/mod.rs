//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.1 que usa el servidor,
//! sin librerías de alto nivel. Incluye:
//!
//! - Parsing de la request line (única línea que se lee de la conexión)
//! - Framing de responses HTTP/1.1 con headers en orden fijo
//! - Manejo de status codes (solo se producen 200 y 404)
//!
//! ## Formato de Request
//!
//! El servidor lee únicamente la primera línea; headers, body y líneas
//! siguientes nunca se consumen:
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! ```
//!
//! ## Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 120\r\n
//! Connection: close\r\n
//! \r\n
//! <body>
//! ```
//!
//! Cada conexión sirve exactamente un par request/response y se cierra
//! (semántica `Connection: close`, sin keep-alive ni pipelining).

pub mod request;   // Parsing de la request line
pub mod response;  // Framing de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::RequestLine` en vez de `http::request::RequestLine`
pub use request::{ParseError, RequestLine};
pub use response::ResponseHead;
pub use status::StatusCode;
