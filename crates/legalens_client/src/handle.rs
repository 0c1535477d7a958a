use std::sync::{mpsc, Arc};
use std::thread;

use app_logging::app_warn;

use crate::api::{AnalyzerApi, ClientSettings, HttpAnalyzerClient};
use crate::types::{AnalysisRecord, ApiError};

enum ClientCommand {
    Analyze { url: String },
    OpenCached { domain: String },
    LoadRecent,
}

/// Events delivered back to the UI thread.
#[derive(Debug)]
pub enum ClientEvent {
    /// The analyze or cached-analysis call settled.
    AnalysisSettled(Result<AnalysisRecord, ApiError>),
    /// The recent-analyses listing settled.
    RecentLoaded(Result<Vec<AnalysisRecord>, ApiError>),
}

/// Channel-based bridge between the synchronous UI thread and the
/// background tokio runtime owning the HTTP client.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    /// Spawns the background runtime thread. Fails when the HTTP client
    /// cannot be built from `settings`.
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(HttpAnalyzerClient::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    /// Submits a URL for analysis.
    pub fn analyze(&self, url: impl Into<String>) {
        self.send(ClientCommand::Analyze { url: url.into() });
    }

    /// Requests the cached analysis for a domain.
    pub fn open_cached(&self, domain: impl Into<String>) {
        self.send(ClientCommand::OpenCached {
            domain: domain.into(),
        });
    }

    /// Requests the recent-analyses listing.
    pub fn load_recent(&self) {
        self.send(ClientCommand::LoadRecent);
    }

    /// Drains one pending event, if any.
    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    fn send(&self, command: ClientCommand) {
        if self.cmd_tx.send(command).is_err() {
            app_warn!("client worker is gone; command dropped");
        }
    }
}

async fn handle_command(
    client: &dyn AnalyzerApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    let event = match command {
        ClientCommand::Analyze { url } => ClientEvent::AnalysisSettled(client.analyze(&url).await),
        ClientCommand::OpenCached { domain } => {
            ClientEvent::AnalysisSettled(client.cached_analysis(&domain).await)
        }
        ClientCommand::LoadRecent => ClientEvent::RecentLoaded(client.recent_analyses().await),
    };
    let _ = event_tx.send(event);
}
