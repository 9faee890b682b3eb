//! # Pool de Workers
//! src/workers/mod.rs
//!
//! Pool acotado de threads que procesa las conexiones aceptadas. El accept
//! loop encola trabajo con `execute` sin bloquearse: el canal mpsc hace de
//! cola y los workers van tomando jobs a medida que se liberan. Con N
//! workers hay como máximo N conexiones en vuelo; el resto espera en el
//! canal (y más atrás, en el backlog de accept del SO).
//!
//! Ningún job tiene timeout: un cliente lento o mudo ocupa su worker
//! indefinidamente. Es un riesgo conocido de agotamiento de recursos que
//! se mantiene a propósito (ver DESIGN.md).
//!
//! Al dropear el pool se cierra el canal: los workers terminan el job en
//! curso, ven el canal cerrado y salen; `Drop` los joinea a todos. Eso es
//! el drenado de shutdown: no entra trabajo nuevo, el existente termina.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

/// Unidad de trabajo que ejecuta un worker
type Job = Box<dyn FnOnce() + Send + 'static>;

/// Pool de workers de tamaño fijo
pub struct ThreadPool {
    workers: Vec<Worker>,
    sender: Option<mpsc::Sender<Job>>,
}

/// Un worker del pool con su thread
struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
}

impl ThreadPool {
    /// Crea un pool con `size` workers
    ///
    /// # Panics
    ///
    /// Si `size` es 0. La configuración valida esto antes de llegar acá.
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::workers::ThreadPool;
    ///
    /// let pool = ThreadPool::new(4);
    /// pool.execute(|| println!("hola desde un worker"));
    /// ```
    pub fn new(size: usize) -> Self {
        assert!(size > 0);

        let (sender, receiver) = mpsc::channel();
        let receiver = Arc::new(Mutex::new(receiver));

        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            workers.push(Worker::new(id, Arc::clone(&receiver)));
        }

        Self {
            workers,
            sender: Some(sender),
        }
    }

    /// Encola un job para que lo ejecute el próximo worker libre
    ///
    /// No bloquea: el canal encola si todos los workers están ocupados.
    pub fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            // Solo falla si todos los workers murieron; no hay nada que
            // hacer con el job en ese caso
            if sender.send(Box::new(job)).is_err() {
                eprintln!("   ❌ Pool sin workers: job descartado");
            }
        }
    }

    /// Retorna la cantidad de workers del pool
    pub fn size(&self) -> usize {
        self.workers.len()
    }
}

impl Drop for ThreadPool {
    /// Drena el pool: cierra el canal y espera a que cada worker termine
    /// su job en curso
    fn drop(&mut self) {
        // Cerrar el canal: los recv() pendientes retornan Err y los
        // workers salen de su loop
        drop(self.sender.take());

        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                if let Err(e) = thread.join() {
                    eprintln!("   ❌ Error al joinear worker {}: {:?}", worker.id, e);
                }
            }
        }
    }
}

impl Worker {
    /// Crea un worker que consume jobs del canal compartido hasta que
    /// el canal se cierra
    fn new(id: usize, receiver: Arc<Mutex<mpsc::Receiver<Job>>>) -> Self {
        let thread = thread::spawn(move || loop {
            // El lock se suelta apenas recv retorna, antes de ejecutar
            // el job: otros workers pueden tomar trabajo en paralelo
            let message = receiver.lock().unwrap().recv();

            match message {
                Ok(job) => job(),
                Err(_) => break,
            }
        });

        Self {
            id,
            thread: Some(thread),
        }
    }
}
