//! Wakeup channel between fetch tasks and the host event loop.
//!
//! A host loop that blocks on terminal input would never notice a finished
//! fetch. Fetch tasks ping this channel after delivering their result; the
//! host then calls [`ImageExplorer::poll_fetch`](crate::ImageExplorer::poll_fetch).

use tokio::sync::mpsc;

/// Sender half. Cheap to clone into tasks.
#[derive(Clone)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Non-blocking. A full buffer already guarantees a pending wakeup, and a
    /// dropped receiver means the host is shutting down.
    pub fn send(&self) {
        let _ = self.tx.try_send(());
    }
}

pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

pub fn channel() -> (WakeupSender, WakeupReceiver) {
    let (tx, rx) = mpsc::channel(16);
    (WakeupSender { tx }, WakeupReceiver { rx })
}
