//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP: un accept loop en el thread que llama
//! a `serve` y un pool acotado de workers que procesa las conexiones. Cada
//! conexión sirve exactamente un request y se cierra.
//!
//! Puntos bloqueantes: accept espera conexiones; dentro de un worker, la
//! lectura de la request line, las escrituras y los reads de disco
//! bloquean hasta completarse. No hay timeouts ni cancelación.

use crate::config::Config;
use crate::files;
use crate::http::{RequestLine, ResponseHead, StatusCode};
use crate::metrics::MetricsCollector;
use crate::router::PathWhitelist;
use crate::template;
use crate::workers::ThreadPool;
use chrono::Local;
use std::fs;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::time::Instant;

/// Servidor HTTP/1.1 de archivos estáticos con pool de workers
pub struct Server {
    config: Config,
    whitelist: Arc<PathWhitelist>,
    metrics: Arc<MetricsCollector>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let mut whitelist = PathWhitelist::new();

        // Rutas servibles: el conjunto completo y cerrado de archivos
        // bajo ./public que el servidor expone
        whitelist.register("/index.html");
        whitelist.register("/spring.svg");
        whitelist.register("/spring.png");
        whitelist.register("/resources.html");
        whitelist.register("/styles.css");
        whitelist.register("/app.js");
        whitelist.register("/links.html");
        whitelist.register("/forms.html");
        whitelist.register("/classic.html");
        whitelist.register("/events.html");
        whitelist.register("/events.js");

        Self {
            config,
            whitelist: Arc::new(whitelist),
            metrics: Arc::new(MetricsCollector::new()),
        }
    }

    /// Whitelist de rutas servibles
    pub fn whitelist(&self) -> &PathWhitelist {
        &self.whitelist
    }

    /// Collector de métricas del servidor
    pub fn metrics(&self) -> Arc<MetricsCollector> {
        Arc::clone(&self.metrics)
    }

    /// Bindea el socket de escucha y corre el accept loop
    ///
    /// Un fallo de bind es fatal: el error se propaga y el proceso no
    /// arranca.
    pub fn run(&mut self) -> io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);

        self.serve(listener)
    }

    /// Corre el accept loop sobre un listener ya bindeado
    ///
    /// Cada conexión aceptada se despacha al pool sin bloquear el loop.
    /// Un error de accept termina el loop con `Err`; al salir, el drop
    /// del pool drena el trabajo en vuelo antes de retornar.
    pub fn serve(&mut self, listener: TcpListener) -> io::Result<()> {
        println!(
            "[*] Pool de {} workers, whitelist de {} rutas\n",
            self.config.pool_size,
            self.whitelist.len()
        );

        let pool = ThreadPool::new(self.config.pool_size);

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let whitelist = Arc::clone(&self.whitelist);
                    let metrics = Arc::clone(&self.metrics);

                    pool.execute(move || {
                        metrics.increment_active_workers();
                        if let Err(e) =
                            Server::handle_connection(stream, whitelist, Arc::clone(&metrics))
                        {
                            // Errores de I/O por conexión: se reportan y la
                            // conexión queda abortada; el resto del servidor
                            // sigue
                            eprintln!("   ❌ Error en conexión: {}", e);
                        }
                        metrics.decrement_active_workers();
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error fatal al aceptar conexión: {}", e);
                    eprintln!("[*] Métricas finales:\n{}", self.metrics.get_metrics_json());
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    /// Maneja una conexión aceptada: un ciclo request/response y cierre
    ///
    /// 1. Lee una sola línea. EOF antes de una línea, o línea que no se
    ///    separa en 3 tokens: aborto silencioso, cero bytes escritos.
    /// 2. Path fuera de la whitelist: 404 con body vacío.
    /// 3. Path whitelisteado: resolver bajo ./public y responder 200,
    ///    con sustitución de `{time}` si es la ruta template, streaming
    ///    directo del archivo si no.
    ///
    /// Un archivo whitelisteado ausente en disco hace fallar resolve();
    /// ese error se propaga (conexión abortada), no se convierte en 404.
    pub fn handle_connection(
        stream: TcpStream,
        whitelist: Arc<PathWhitelist>,
        metrics: Arc<MetricsCollector>,
    ) -> io::Result<()> {
        let start = Instant::now();

        let peer_addr = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Leer exactamente una línea: headers, body y líneas siguientes
        // nunca se consumen
        let mut reader = BufReader::new(&stream);
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            println!("   ⚠️  {} cerró sin enviar request", peer_addr);
            return Ok(());
        }

        let request = match RequestLine::parse(line.trim_end()) {
            Ok(request) => request,
            Err(e) => {
                // Request line malformada: cerrar sin escribir respuesta
                println!("   ⚠️  {} request malformado: {}", peer_addr, e);
                return Ok(());
            }
        };

        let path = request.path().to_string();
        let mut writer = BufWriter::new(&stream);

        if !whitelist.contains(&path) {
            ResponseHead::not_found().write_to(&mut writer)?;
            writer.flush()?;

            metrics.record_request(&path, StatusCode::NotFound.as_u16(), start.elapsed());
            println!("   ✅ {} {} → 404 Not Found", request.method(), path);
            return Ok(());
        }

        let resolved = files::resolve(&path)?;

        let bytes_sent = if path == template::TEMPLATE_PATH {
            Self::send_template(&mut writer, &resolved)?
        } else {
            Self::send_file(&mut writer, &resolved)?
        };
        writer.flush()?;

        let latency = start.elapsed();
        metrics.record_request(&path, StatusCode::Ok.as_u16(), latency);
        println!(
            "   ✅ {} {} → 200 OK ({} bytes, {:.2}ms)",
            request.method(),
            path,
            bytes_sent,
            latency.as_secs_f64() * 1000.0
        );

        Ok(())
    }

    /// Sirve la ruta template: lee el archivo como texto, sustituye cada
    /// `{time}` y responde con el largo en bytes del contenido ya
    /// renderizado (acá sí se bufferea el body completo)
    fn send_template<W: Write>(writer: &mut W, resolved: &files::ResolvedFile) -> io::Result<u64> {
        let template_text = fs::read_to_string(&resolved.path)?;
        let body = template::render(&template_text, Local::now());

        ResponseHead::ok(&resolved.mime, body.len() as u64).write_to(writer)?;
        writer.write_all(body.as_bytes())?;

        Ok(body.len() as u64)
    }

    /// Sirve un archivo normal: cabecera con el tamaño en disco y después
    /// el contenido streameado, sin bufferear el archivo completo
    fn send_file<W: Write>(writer: &mut W, resolved: &files::ResolvedFile) -> io::Result<u64> {
        ResponseHead::ok(&resolved.mime, resolved.size).write_to(writer)?;

        let mut file = File::open(&resolved.path)?;
        io::copy(&mut file, writer)
    }
}
