use std::sync::mpsc;
use std::thread::{self, JoinHandle, ThreadId};

enum UiMessage {
    Run(Box<dyn FnOnce() + Send + 'static>),
    Stop,
}

/// Sender side of the UI loop. Cheap to clone; `dispatch` never blocks.
#[derive(Clone)]
pub struct UiHandle {
    tx: mpsc::Sender<UiMessage>,
}

impl UiHandle {
    /// Schedules `task` to run on the UI thread. Tasks run in dispatch
    /// order. Dispatching after shutdown is a silent no-op.
    pub fn dispatch<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.tx.send(UiMessage::Run(Box::new(task))).is_err() {
            tracing::debug!("UI loop is gone, dropping dispatched task");
        }
    }
}

/// A dedicated thread that owns all display mutations. Stands in for the
/// host platform's main/UI thread: anything that touches the display sink
/// must be dispatched here.
pub struct UiThread {
    tx: mpsc::Sender<UiMessage>,
    worker: Option<JoinHandle<()>>,
    thread_id: ThreadId,
}

impl UiThread {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<UiMessage>();
        let (id_tx, id_rx) = mpsc::channel();

        let worker = thread::spawn(move || {
            // Publish our id before entering the loop so spawn() can return it.
            let _ = id_tx.send(thread::current().id());
            while let Ok(message) = rx.recv() {
                match message {
                    UiMessage::Run(task) => task(),
                    UiMessage::Stop => break,
                }
            }
        });

        let thread_id = id_rx.recv().unwrap_or_else(|_| thread::current().id());

        Self {
            tx,
            worker: Some(worker),
            thread_id,
        }
    }

    pub fn handle(&self) -> UiHandle {
        UiHandle {
            tx: self.tx.clone(),
        }
    }

    /// Identity of the UI-owning thread; display updates must land here.
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Drains already-queued tasks, then joins the loop thread. Tasks
    /// dispatched after shutdown begins are dropped.
    pub fn shutdown(mut self) {
        self.shutdown_inner();
    }

    fn shutdown_inner(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = self.tx.send(UiMessage::Stop);
            if worker.join().is_err() {
                tracing::error!("UI loop thread panicked");
            }
        }
    }
}

impl Drop for UiThread {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}
