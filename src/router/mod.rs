//! # Whitelist de Rutas
//! src/router/mod.rs
//!
//! Este módulo implementa la whitelist fija de rutas que el servidor sirve.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → PathWhitelist → (servir archivo | 404)
//! ```
//!
//! No hay enrutamiento dinámico: la whitelist es la única tabla de
//! decisión. Cualquier path que no sea miembro exacto del conjunto
//! recibe 404. Como el matching es literal, la whitelist es además la
//! única protección contra directory traversal: `/../etc/passwd` no es
//! miembro, así que nunca llega al filesystem.
//!
//! La whitelist se construye una vez en `Server::new` y se comparte
//! read-only entre todos los workers (sin sincronización: nunca muta).

use std::collections::HashSet;

/// Conjunto inmutable de rutas servibles
pub struct PathWhitelist {
    /// Rutas permitidas, matching exacto
    paths: HashSet<String>,
}

impl PathWhitelist {
    /// Crea una whitelist vacía
    pub fn new() -> Self {
        Self {
            paths: HashSet::new(),
        }
    }

    /// Registra una ruta servible
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::router::PathWhitelist;
    ///
    /// let mut whitelist = PathWhitelist::new();
    /// whitelist.register("/index.html");
    ///
    /// assert!(whitelist.contains("/index.html"));
    /// ```
    pub fn register(&mut self, path: &str) {
        self.paths.insert(path.to_string());
    }

    /// Verifica si un path es miembro de la whitelist
    ///
    /// El matching es exacto: query strings, encoding y variantes de
    /// mayúsculas hacen que el path no matchee.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Retorna la cantidad de rutas registradas
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Verifica si la whitelist está vacía
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for PathWhitelist {
    fn default() -> Self {
        Self::new()
    }
}
