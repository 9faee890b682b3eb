//! # Sustitución de Template
//! src/template.rs
//!
//! Este módulo implementa la única transformación de contenido del
//! servidor: en la ruta template (`/classic.html`), cada ocurrencia del
//! token literal `{time}` se reemplaza por el timestamp local actual.
//!
//! El formato del timestamp es fijo (`%Y-%m-%d %H:%M:%S`) y determinístico
//! dada una lectura del reloj; ningún cliente depende del formato exacto.

use chrono::{DateTime, Local};

/// Ruta whitelisteada cuyo contenido recibe sustitución de template
pub const TEMPLATE_PATH: &str = "/classic.html";

/// Token literal que se sustituye en el template
pub const TIME_TOKEN: &str = "{time}";

/// Formato del timestamp renderizado
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reemplaza cada ocurrencia de `{time}` por el timestamp dado
///
/// Es una función pura de (template, lectura del reloj): el caller pasa
/// `Local::now()` y los tests pasan un instante fijo.
///
/// # Ejemplo
///
/// ```
/// use chrono::{Local, TimeZone};
/// use static_server::template;
///
/// let now = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// let html = template::render("<p>{time}</p>", now);
///
/// assert_eq!(html, "<p>2024-01-15 10:30:00</p>");
/// ```
pub fn render(template: &str, now: DateTime<Local>) -> String {
    template.replace(TIME_TOKEN, &now.format(TIME_FORMAT).to_string())
}
