use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::Response,
};
use axum::extract::ws::WebSocket;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::handlers;
use crate::messages::OutboundMessage;
use crate::session::TranslatorSession;
use crate::state::{AppState, ClientContext};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_uid = state.generate_client_uid();
    info!("New WebSocket connection: {}", client_uid);

    state.client_contexts.insert(
        client_uid.clone(),
        ClientContext {
            client_uid: client_uid.clone(),
        },
    );

    let (mut sender, mut receiver) = socket.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<OutboundMessage>();

    // Single writer for the socket; handlers and completions only enqueue.
    let writer = tokio::spawn(async move {
        while let Some(message) = outbound_rx.recv().await {
            let text = match serde_json::to_string(&message) {
                Ok(text) => text,
                Err(e) => {
                    error!("Failed to serialize outbound message: {}", e);
                    continue;
                }
            };
            if let Err(e) = sender.send(Message::Text(text)).await {
                error!("Failed to send message: {}", e);
                break;
            }
        }
    });

    let (mut session, mut completions) =
        TranslatorSession::new(client_uid.clone(), state.session_services(), outbound_tx);
    session.greet();

    loop {
        tokio::select! {
            msg = receiver.next() => match msg {
                Some(Ok(Message::Text(text))) => {
                    handlers::handle_message(&mut session, &text);
                }
                Some(Ok(Message::Close(_))) | None => {
                    info!("Client {} disconnected", client_uid);
                    break;
                }
                Some(Err(e)) => {
                    error!("WebSocket error: {}", e);
                    break;
                }
                Some(Ok(_)) => {}
            },
            Some(completion) = completions.recv() => {
                session.handle_completion(completion);
            }
        }
    }

    // Dropping the session closes the outbound channel and ends the writer.
    drop(session);
    let _ = writer.await;

    state.client_contexts.remove(&client_uid);
    info!("Cleaned up client {}", client_uid);
}
