//! # Collector de Métricas
//! src/metrics/collector.rs
//!
//! Recolecta y agrega métricas del servidor en tiempo real. El collector
//! es el único estado mutable compartido del proceso además del canal del
//! pool; se protege con un Mutex y se comparte por Arc entre workers.
//!
//! Las conexiones abortadas en silencio (request line malformada) no se
//! registran: nunca se escribe una respuesta para ellas.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Collector de métricas thread-safe
#[derive(Clone)]
pub struct MetricsCollector {
    inner: Arc<Mutex<MetricsData>>,
    start_time: Instant,
}

/// Datos internos de métricas
struct MetricsData {
    /// Contador total de requests respondidos
    total_requests: u64,

    /// Requests por código de estado (200, 404)
    status_codes: HashMap<u16, u64>,

    /// Latencias registradas (en microsegundos)
    latencies: Vec<u64>,

    /// Máximo de latencias a guardar (para calcular percentiles)
    max_latencies: usize,

    /// Requests por ruta
    requests_per_path: HashMap<String, u64>,

    /// Workers ocupados actualmente
    active_workers: u64,
}

impl MetricsCollector {
    /// Crea un nuevo collector de métricas
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MetricsData {
                total_requests: 0,
                status_codes: HashMap::new(),
                latencies: Vec::with_capacity(10000),
                max_latencies: 10000, // Guardar últimas 10k latencias
                requests_per_path: HashMap::new(),
                active_workers: 0,
            })),
            start_time: Instant::now(),
        }
    }

    /// Registra un request respondido
    pub fn record_request(&self, path: &str, status_code: u16, latency: Duration) {
        let mut data = self.inner.lock().unwrap();

        data.total_requests += 1;

        *data.status_codes.entry(status_code).or_insert(0) += 1;

        // Registrar latencia (en microsegundos), ventana acotada
        let latency_us = latency.as_micros() as u64;
        if data.latencies.len() >= data.max_latencies {
            data.latencies.remove(0);
        }
        data.latencies.push(latency_us);

        *data.requests_per_path.entry(path.to_string()).or_insert(0) += 1;
    }

    /// Incrementa el contador de workers ocupados
    pub fn increment_active_workers(&self) {
        let mut data = self.inner.lock().unwrap();
        data.active_workers += 1;
    }

    /// Decrementa el contador de workers ocupados
    pub fn decrement_active_workers(&self) {
        let mut data = self.inner.lock().unwrap();
        if data.active_workers > 0 {
            data.active_workers -= 1;
        }
    }

    /// Obtiene el número de workers ocupados
    pub fn active_workers(&self) -> u64 {
        let data = self.inner.lock().unwrap();
        data.active_workers
    }

    /// Obtiene un snapshot de las métricas
    pub fn get_snapshot(&self) -> MetricsSnapshot {
        let data = self.inner.lock().unwrap();
        let (p50, p95, p99, avg) = Self::calculate_percentiles(&data.latencies);

        MetricsSnapshot {
            uptime_secs: self.start_time.elapsed().as_secs(),
            total_requests: data.total_requests,
            active_workers: data.active_workers,
            status_codes: data.status_codes.clone(),
            requests_per_path: data.requests_per_path.clone(),
            latency_us: LatencySummary {
                p50,
                p95,
                p99,
                avg,
                samples: data.latencies.len(),
            },
        }
    }

    /// Obtiene las métricas actuales en formato JSON
    pub fn get_metrics_json(&self) -> String {
        let snapshot = self.get_snapshot();
        serde_json::to_string_pretty(&snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    /// Calcula percentiles de latencia
    fn calculate_percentiles(latencies: &[u64]) -> (u64, u64, u64, u64) {
        if latencies.is_empty() {
            return (0, 0, 0, 0);
        }

        let mut sorted = latencies.to_vec();
        sorted.sort_unstable();

        let len = sorted.len();
        let p50 = sorted[len * 50 / 100];
        let p95 = sorted[(len * 95 / 100).min(len - 1)];
        let p99 = sorted[(len * 99 / 100).min(len - 1)];

        let sum: u64 = sorted.iter().sum();
        let avg = sum / len as u64;

        (p50, p95, p99, avg)
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot de métricas (para logging y uso externo)
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub uptime_secs: u64,
    pub total_requests: u64,
    pub active_workers: u64,
    pub status_codes: HashMap<u16, u64>,
    pub requests_per_path: HashMap<String, u64>,
    pub latency_us: LatencySummary,
}

/// Resumen de latencias en microsegundos
#[derive(Debug, Clone, Serialize)]
pub struct LatencySummary {
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub avg: u64,
    pub samples: usize,
}
