//! Background work: the initial fetch and flag probes.
//!
//! Results come back as directory [`Action`]s over an unbounded channel that
//! the UI loop drains between input polls. Dropping [`Tasks`] aborts
//! anything still in flight, so nothing reaches the state after teardown.

use countries_core::{Action, CountryClient};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub struct Tasks {
    runtime: Handle,
    client: CountryClient,
    tx: UnboundedSender<Action>,
    handles: Vec<JoinHandle<()>>,
}

impl Tasks {
    pub fn new(runtime: Handle, client: CountryClient, tx: UnboundedSender<Action>) -> Self {
        Self {
            runtime,
            client,
            tx,
            handles: Vec::new(),
        }
    }

    /// Start the one and only country fetch
    pub fn spawn_load(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.spawn(async move {
            let result = client.fetch_countries().await;
            // Receiver gone means the UI has shut down
            let _ = tx.send(Action::LoadFinished(result));
        });
    }

    /// Check one flag; report a failure as `FlagFailed`
    pub fn spawn_probe(&mut self, name: String, url: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.spawn(async move {
            match client.probe_flag(&url).await {
                Ok(()) => debug!(country = %name, "flag ok"),
                Err(err) => {
                    warn!(country = %name, url = %url, error = %err, "flag failed to load");
                    let _ = tx.send(Action::FlagFailed(name));
                }
            }
        });
    }

    fn spawn<F>(&mut self, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(self.runtime.spawn(future));
    }
}

impl Drop for Tasks {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}
