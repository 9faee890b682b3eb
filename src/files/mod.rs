//! # Resolución de Archivos Estáticos
//! src/files/mod.rs
//!
//! Este módulo resuelve un path whitelisteado a su archivo bajo la raíz
//! fija `./public` y determina su content-type y tamaño.
//!
//! No se hace ninguna normalización de paths más allá del join simple:
//! la whitelist (matching exacto) es la única protección de traversal,
//! así que a este módulo solo llegan paths ya validados.
//!
//! Un archivo whitelisteado pero ausente o ilegible en disco NO se mapea
//! a 404: el error de I/O se propaga al worker, que aborta la conexión.
//! La asimetría es intencional (ver DESIGN.md).

use std::fs;
use std::io;
use std::path::PathBuf;

/// Raíz fija de los archivos servidos
pub const PUBLIC_ROOT: &str = "./public";

/// Archivo resuelto para un request, vive solo durante la conexión
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Ruta en disco bajo la raíz pública
    pub path: PathBuf,

    /// Content-type detectado por extensión
    pub mime: String,

    /// Tamaño en bytes en disco
    pub size: u64,
}

/// Resuelve un path de request a su archivo bajo `./public`
///
/// Determina el MIME por extensión (fallback `application/octet-stream`)
/// y lee el tamaño del archivo.
///
/// # Errores
///
/// Propaga el `io::Error` de `metadata` si el archivo no existe o no es
/// accesible.
///
/// # Ejemplo
///
/// ```
/// use static_server::files;
///
/// let resolved = files::resolve("/styles.css").unwrap();
/// assert_eq!(resolved.mime, "text/css");
/// assert!(resolved.size > 0);
/// ```
pub fn resolve(request_path: &str) -> io::Result<ResolvedFile> {
    let path = PathBuf::from(PUBLIC_ROOT).join(request_path.trim_start_matches('/'));

    let mime = mime_guess::from_path(&path)
        .first_or_octet_stream()
        .to_string();

    let size = fs::metadata(&path)?.len();

    Ok(ResolvedFile { path, mime, size })
}
