//! # Static Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 concurrente de archivos estáticos implementado desde
//! cero: un accept loop, un pool acotado de workers y un pipeline fijo de
//! parse → whitelist → resolución de archivo → respuesta.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de la request line y framing de responses HTTP/1.1
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `router`: Whitelist fija de rutas servibles
//! - `files`: Resolución de rutas a archivos bajo `./public` y MIME
//! - `template`: Sustitución del token `{time}` en la ruta template
//! - `workers`: Pool acotado de worker threads
//! - `metrics`: Recolección de métricas y observabilidad
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use static_server::server::Server;
//! use static_server::config::Config;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod http;
pub mod config;
pub mod server;
pub mod router;
pub mod files;
pub mod template;
pub mod workers;
pub mod metrics;
