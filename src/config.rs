//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de archivos estáticos
//! con soporte para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./static_server --port 9999 --pool-size 64
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=9999 HTTP_HOST=0.0.0.0 ./static_server
//! ```

use clap::Parser;

/// Configuración del servidor de archivos estáticos
#[derive(Debug, Clone, Parser)]
#[command(name = "static_server")]
#[command(about = "Servidor HTTP/1.1 concurrente de archivos estáticos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "9999", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Número de workers del pool de conexiones
    #[arg(long = "pool-size", default_value = "64", env = "POOL_SIZE")]
    pub pool_size: usize,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// # Ejemplo
    /// ```no_run
    /// use static_server::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:9999");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.pool_size == 0 {
            return Err("Pool size must be >= 1".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════╗");
        println!("║     Static HTTP/1.1 Server Configuration     ║");
        println!("╚══════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());
        println!();
        println!("👷 Worker Pool:");
        println!("   Workers:      {}", self.pool_size);
        println!();
        println!("📁 Static files:");
        println!("   Root:         {}", crate::files::PUBLIC_ROOT);
        println!("   Template:     {}", crate::template::TEMPLATE_PATH);
        println!();
        println!("═══════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 9999,
            host: "127.0.0.1".to_string(),
            pool_size: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 9999);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.pool_size, 64);
    }

    #[test]
    fn test_address() {
        let config = Config::default();
        assert_eq!(config.address(), "127.0.0.1:9999");
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "0.0.0.0".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_success() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_pool_size() {
        let mut config = Config::default();
        config.pool_size = 0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Pool size"));
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.host = "  ".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Host"));
    }

    #[test]
    fn test_config_custom_values() {
        let mut config = Config::default();
        config.port = 3000;
        config.host = "0.0.0.0".to_string();
        config.pool_size = 8;

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.pool_size, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_print_summary() {
        let config = Config::default();
        // Should not panic
        config.print_summary();
    }
}
