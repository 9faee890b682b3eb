//! # Framing de Respuestas HTTP
//!
//! Este módulo arma la cabecera de una respuesta HTTP/1.1 (status line +
//! headers + línea vacía) y la serializa completa a bytes antes de que
//! nada toque el socket. El body se escribe aparte: para archivos normales
//! se streamea desde disco; para la ruta template y el 404 el body (o su
//! ausencia) ya está en memoria.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/css\r\n
//! Content-Length: 523\r\n
//! Connection: close\r\n
//! \r\n
//! <body>
//! ```
//!
//! El orden de los headers es parte del contrato: Content-Type (solo en
//! 200), Content-Length, Connection: close. Por eso se usa un Vec de pares
//! en vez de un mapa.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use static_server::http::ResponseHead;
//!
//! let head = ResponseHead::ok("text/css", 523);
//! let bytes = head.to_bytes();
//! // Ahora puedes escribir `bytes` al socket y después streamear el body
//! ```

use super::StatusCode;
use std::io::Write;

/// Cabecera de una respuesta HTTP/1.1: status line + headers ordenados
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// Código de estado (200 o 404)
    status: StatusCode,

    /// Headers en orden de emisión
    headers: Vec<(String, String)>,
}

impl ResponseHead {
    /// Crea una cabecera sin headers
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    /// Agrega un header al final de la lista
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::http::{ResponseHead, StatusCode};
    ///
    /// let head = ResponseHead::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/html");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Cabecera de éxito para un archivo servido
    ///
    /// Headers en el orden del contrato: Content-Type, Content-Length,
    /// Connection: close.
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::http::ResponseHead;
    ///
    /// let head = ResponseHead::ok("text/html", 120);
    /// let text = String::from_utf8(head.to_bytes()).unwrap();
    /// assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    /// ```
    pub fn ok(mime: &str, content_length: u64) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", mime)
            .with_header("Content-Length", &content_length.to_string())
            .with_header("Connection", "close")
    }

    /// Cabecera de 404: sin Content-Type, sin body
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::http::ResponseHead;
    ///
    /// let bytes = ResponseHead::not_found().to_bytes();
    /// assert_eq!(
    ///     bytes,
    ///     b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    /// );
    /// ```
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
            .with_header("Content-Length", "0")
            .with_header("Connection", "close")
    }

    /// Serializa la cabecera completa a bytes
    ///
    /// Genera, en orden: status line `HTTP/1.1 <code> <reason>\r\n`,
    /// cada header como `Name: value\r\n`, y la línea vacía separadora.
    /// La cabecera se arma entera en memoria para que se escriba al socket
    /// de una sola vez.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // 1. Status line
        let status_line = format!("HTTP/1.1 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        // 2. Headers, en orden de inserción
        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        result
    }

    /// Escribe la cabecera serializada en el stream de salida
    ///
    /// No hace flush: el caller decide cuándo, típicamente después de
    /// escribir el body.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(&self.to_bytes())
    }

    /// Obtiene el código de estado
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene los headers en orden
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}
