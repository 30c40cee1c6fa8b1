use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::shared::AppState;

use super::socket::{Connection, MessageHandler, SocketWrapper};

/// WebSocket endpoint. Every upgraded socket becomes one player connection.
///
/// GET /ws
pub async fn websocket_handler(ws: WebSocketUpgrade, State(app_state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| {
        serve_connection(Box::new(socket), Uuid::new_v4().to_string(), app_state)
    })
}

/// Runs one player connection from registration to disconnect cleanup
pub(crate) async fn serve_connection(
    socket: Box<dyn SocketWrapper>,
    connection_id: String,
    app_state: AppState,
) {
    info!(connection_id = %connection_id, "User connected");

    // Outbound channel (app -> client)
    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();

    app_state
        .connection_manager
        .add_connection(connection_id.clone(), outbound_sender)
        .await;

    let message_handler: Arc<dyn MessageHandler> = app_state.event_router.clone();

    let connection = Connection::new(
        connection_id.clone(),
        socket,
        outbound_receiver,
        Arc::clone(&message_handler),
    );

    if let Err(e) = connection.run().await {
        warn!(
            connection_id = %connection_id,
            error = %e,
            "WebSocket connection error"
        );
    }

    // Stop routing to this socket before telling the games it left
    app_state
        .connection_manager
        .remove_connection(&connection_id)
        .await;

    message_handler.handle_disconnect(&connection_id).await;

    info!(connection_id = %connection_id, "User disconnected");
}
