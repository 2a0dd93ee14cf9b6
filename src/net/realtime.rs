//! Change-notification channel over the hosted realtime socket.
//!
//! The socket speaks the Phoenix message protocol: the client joins a topic
//! with a `postgres_changes` config filtered to the owner's rows, answers
//! with periodic heartbeats, and treats every change event identically. The
//! expected reaction is a full list refetch; payloads are never inspected.
//!
//! All socket logic is gated behind `#[cfg(feature = "web")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are logged and absorbed by a reconnect loop with
//! exponential backoff while the subscription stays alive; the view layer
//! never sees socket errors.

#[cfg(test)]
#[path = "realtime_test.rs"]
mod realtime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::types::SocketMessage;

#[cfg(feature = "web")]
use crate::config::Config;
#[cfg(feature = "web")]
use crate::net::types::Session;

/// Seconds between Phoenix heartbeats; the hosted socket drops silent
/// connections after roughly twice this.
#[cfg(feature = "web")]
const HEARTBEAT_SECS: u64 = 30;

/// Topic for the owner's bookmark changes.
#[cfg(any(test, feature = "web"))]
fn channel_topic(owner_id: &str) -> String {
    format!("realtime:bookmarks:{owner_id}")
}

/// Join message subscribing to every change on the owner's rows.
#[cfg(any(test, feature = "web"))]
fn join_message(topic: &str, owner_id: &str, access_token: &str, reference: &str) -> SocketMessage {
    SocketMessage {
        topic: topic.to_owned(),
        event: "phx_join".to_owned(),
        payload: serde_json::json!({
            "access_token": access_token,
            "config": {
                "postgres_changes": [{
                    "event": "*",
                    "schema": "public",
                    "table": "bookmarks",
                    "filter": format!("user_id=eq.{owner_id}"),
                }],
            },
        }),
        reference: Some(reference.to_owned()),
    }
}

#[cfg(any(test, feature = "web"))]
fn heartbeat_message(reference: &str) -> SocketMessage {
    SocketMessage {
        topic: "phoenix".to_owned(),
        event: "heartbeat".to_owned(),
        payload: serde_json::json!({}),
        reference: Some(reference.to_owned()),
    }
}

#[cfg(any(test, feature = "web"))]
fn leave_message(topic: &str, reference: &str) -> SocketMessage {
    SocketMessage {
        topic: topic.to_owned(),
        event: "phx_leave".to_owned(),
        payload: serde_json::json!({}),
        reference: Some(reference.to_owned()),
    }
}

/// Whether an incoming message is a row-change notification.
///
/// Inserts, updates, and deletes all arrive as the same event; the payload
/// detail is deliberately ignored.
pub fn is_change_notification(message: &SocketMessage) -> bool {
    message.event == "postgres_changes"
}

/// Handle for an active change subscription.
///
/// Dropping the handle does not stop the channel; call
/// [`ChangeSubscription::unsubscribe`] on teardown. Afterwards the callback
/// is guaranteed not to fire again.
#[derive(Clone, Debug)]
pub struct ChangeSubscription {
    alive: Arc<AtomicBool>,
    #[cfg(feature = "web")]
    outgoing: futures::channel::mpsc::UnboundedSender<SocketMessage>,
    #[cfg(feature = "web")]
    topic: String,
}

impl ChangeSubscription {
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Stop the channel: best-effort leave, then shut the reconnect loop
    /// down. No callback fires after this returns.
    pub fn unsubscribe(&self) {
        self.alive.store(false, Ordering::Relaxed);
        #[cfg(feature = "web")]
        {
            let _ = self
                .outgoing
                .unbounded_send(leave_message(&self.topic, &uuid::Uuid::new_v4().to_string()));
            self.outgoing.close_channel();
        }
    }

    #[cfg(all(test, not(feature = "web")))]
    fn test_handle() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }
}

/// Open a live channel filtered to the owner's rows. `on_change` runs for
/// every change notification until the subscription is unsubscribed.
#[cfg(feature = "web")]
pub fn subscribe_to_changes(
    config: &Config,
    session: &Session,
    on_change: impl Fn() + 'static,
) -> ChangeSubscription {
    use futures::channel::mpsc;

    let alive = Arc::new(AtomicBool::new(true));
    let (tx, rx) = mpsc::unbounded::<SocketMessage>();
    let topic = channel_topic(&session.user_id);
    let subscription = ChangeSubscription {
        alive: alive.clone(),
        outgoing: tx.clone(),
        topic: topic.clone(),
    };

    leptos::task::spawn_local(channel_loop(
        config.realtime_endpoint(),
        topic,
        session.user_id.clone(),
        session.access_token.clone(),
        alive,
        tx,
        rx,
        on_change,
    ));

    subscription
}

/// Connection loop with reconnect and exponential backoff.
#[cfg(feature = "web")]
#[allow(clippy::too_many_arguments)]
async fn channel_loop(
    socket_url: String,
    topic: String,
    owner_id: String,
    access_token: String,
    alive: Arc<AtomicBool>,
    tx: futures::channel::mpsc::UnboundedSender<SocketMessage>,
    rx: futures::channel::mpsc::UnboundedReceiver<SocketMessage>,
    on_change: impl Fn() + 'static,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let on_change = Rc::new(on_change);
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    while alive.load(Ordering::Relaxed) {
        match connect_and_run(
            &socket_url,
            &topic,
            &owner_id,
            &access_token,
            &alive,
            &tx,
            &rx,
            on_change.clone(),
        )
        .await
        {
            Ok(()) => {
                leptos::logging::log!("realtime channel closed");
            }
            Err(e) => {
                leptos::logging::warn!("realtime channel error: {e}");
            }
        }

        if !alive.load(Ordering::Relaxed) {
            break;
        }

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect, join the topic, and pump messages until disconnect or
/// unsubscription.
#[cfg(feature = "web")]
#[allow(clippy::too_many_arguments)]
async fn connect_and_run(
    socket_url: &str,
    topic: &str,
    owner_id: &str,
    access_token: &str,
    alive: &Arc<AtomicBool>,
    tx: &futures::channel::mpsc::UnboundedSender<SocketMessage>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<SocketMessage>>>,
    on_change: std::rc::Rc<impl Fn() + 'static>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(socket_url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    let join = join_message(topic, owner_id, access_token, &uuid::Uuid::new_v4().to_string());
    let raw = serde_json::to_string(&join).map_err(|e| e.to_string())?;
    ws_write
        .send(Message::Text(raw))
        .await
        .map_err(|e| e.to_string())?;

    // Forward queued outgoing messages (heartbeats, leave) to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        while let Some(message) = rx_borrow.next().await {
            let Ok(raw) = serde_json::to_string(&message) else {
                continue;
            };
            if ws_write.send(Message::Text(raw)).await.is_err() {
                break;
            }
        }
    };

    // Heartbeats keep the hosted socket from dropping the connection.
    let heartbeat_tx = tx.clone();
    let heartbeat_alive = alive.clone();
    let heartbeat_task = async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(HEARTBEAT_SECS)).await;
            if !heartbeat_alive.load(Ordering::Relaxed) {
                break;
            }
            let beat = heartbeat_message(&uuid::Uuid::new_v4().to_string());
            if heartbeat_tx.unbounded_send(beat).is_err() {
                break;
            }
        }
    };

    // Receive loop: classify incoming messages and fire the callback.
    let recv_alive = alive.clone();
    let recv_task = async move {
        while let Some(incoming) = ws_read.next().await {
            match incoming {
                Ok(Message::Text(raw)) => {
                    if let Ok(message) = serde_json::from_str::<SocketMessage>(&raw) {
                        if is_change_notification(&message) && recv_alive.load(Ordering::Relaxed) {
                            on_change();
                        }
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("realtime recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run all three loops; when any finishes, the connection is done.
    futures::future::select(
        Box::pin(futures::future::select(
            Box::pin(send_task),
            Box::pin(recv_task),
        )),
        Box::pin(heartbeat_task),
    )
    .await;

    Ok(())
}
