//! Live analytics feed over WebSocket.
//!
//! Subscribers connect to a dedicated port and receive the entire parsed
//! query history as a JSON array every time a new query is logged. There
//! is no replay on connect, no acknowledgment, and no backpressure: a
//! subscriber that falls behind simply resumes with the next snapshot.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::analytics::log::QueryLogEntry;

/// Fan-out channel carrying full-history snapshots to feed subscribers.
#[derive(Debug, Clone)]
pub struct LiveFeed {
    tx: broadcast::Sender<String>,
}

impl LiveFeed {
    /// Create a feed with the given channel capacity. Snapshots beyond
    /// capacity are dropped for lagging subscribers.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        LiveFeed { tx }
    }

    /// Broadcast the full history to every connected subscriber.
    ///
    /// Serialization failures and the no-subscribers case are both
    /// non-events: the feed is best-effort.
    pub fn publish(&self, history: &[QueryLogEntry]) {
        let snapshot = match serde_json::to_string(history) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize analytics snapshot: {e}");
                return;
            }
        };

        // send only errors when there are no receivers
        let _ = self.tx.send(snapshot);
    }

    /// Open a subscription. The receiver sees nothing until the next
    /// publish.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    /// Number of currently-connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for LiveFeed {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Run the feed's WebSocket server until the process exits.
pub async fn serve_feed(feed: LiveFeed, port: u16) -> anyhow::Result<()> {
    let app = feed_router(feed);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "live feed listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn feed_router(feed: LiveFeed) -> Router {
    Router::new().route("/", get(feed_handler)).with_state(feed)
}

async fn feed_handler(ws: WebSocketUpgrade, State(feed): State<LiveFeed>) -> impl IntoResponse {
    let rx = feed.subscribe();
    ws.on_upgrade(move |socket| forward_snapshots(socket, rx))
}

/// Push every broadcast snapshot to one subscriber until either side
/// disconnects. Inbound frames are drained and ignored; the feed has no
/// other message types.
async fn forward_snapshots(socket: WebSocket, mut rx: broadcast::Receiver<String>) {
    debug!("feed subscriber connected");
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            snapshot = rx.recv() => match snapshot {
                Ok(snapshot) => {
                    if sender.send(Message::Text(snapshot.into())).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("feed subscriber lagged by {n} snapshots");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    break;
                }
            },
            incoming = receiver.next() => match incoming {
                Some(Ok(_)) => {}
                Some(Err(_)) | None => break,
            },
        }
    }
    debug!("feed subscriber disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_full_history() {
        let feed = LiveFeed::new(8);
        let mut rx = feed.subscribe();

        let history = vec![
            QueryLogEntry::new("oil change", "Oil Change", 0.9),
            QueryLogEntry::new("gibberish", "Need More Info", 0.0),
        ];
        feed.publish(&history);

        let snapshot = rx.recv().await.unwrap();
        let parsed: Vec<QueryLogEntry> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(parsed, history);
    }

    #[tokio::test]
    async fn test_nothing_delivered_before_first_publish() {
        let feed = LiveFeed::new(8);
        let mut rx = feed.subscribe();

        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_a_noop() {
        let feed = LiveFeed::new(8);
        assert_eq!(feed.subscriber_count(), 0);

        // Must not panic or error.
        feed.publish(&[QueryLogEntry::new("q", "Oil Change", 0.5)]);
    }

    #[tokio::test]
    async fn test_every_subscriber_sees_each_snapshot() {
        let feed = LiveFeed::new(8);
        let mut a = feed.subscribe();
        let mut b = feed.subscribe();

        feed.publish(&[QueryLogEntry::new("q", "Oil Change", 0.5)]);

        assert_eq!(a.recv().await.unwrap(), b.recv().await.unwrap());
    }
}
