//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::usecase::{
    GetActiveUsersUseCase, GetMessagesUseCase, PostMessageUseCase, RecordPingUseCase,
};

use super::{
    handler::{get_active_users, get_messages, health_check, post_message, record_ping},
    signal::shutdown_signal,
    state::AppState,
};

/// Polling chat server
///
/// This struct encapsulates the use cases and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     post_message_usecase,
///     get_messages_usecase,
///     record_ping_usecase,
///     get_active_users_usecase,
/// );
/// server.run("0.0.0.0".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// PostMessageUseCase（メッセージ投稿のユースケース）
    post_message_usecase: Arc<PostMessageUseCase>,
    /// GetMessagesUseCase（メッセージ一覧取得のユースケース）
    get_messages_usecase: Arc<GetMessagesUseCase>,
    /// RecordPingUseCase（ping 記録のユースケース）
    record_ping_usecase: Arc<RecordPingUseCase>,
    /// GetActiveUsersUseCase（アクティブユーザー取得のユースケース）
    get_active_users_usecase: Arc<GetActiveUsersUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        post_message_usecase: Arc<PostMessageUseCase>,
        get_messages_usecase: Arc<GetMessagesUseCase>,
        record_ping_usecase: Arc<RecordPingUseCase>,
        get_active_users_usecase: Arc<GetActiveUsersUseCase>,
    ) -> Self {
        Self {
            post_message_usecase,
            get_messages_usecase,
            record_ping_usecase,
            get_active_users_usecase,
        }
    }

    /// Build the axum router
    ///
    /// Unsupported methods on a known path are answered with 405 by axum's
    /// method router.
    pub fn into_router(self) -> Router {
        let app_state = Arc::new(AppState {
            post_message_usecase: self.post_message_usecase,
            get_messages_usecase: self.get_messages_usecase,
            record_ping_usecase: self.record_ping_usecase,
            get_active_users_usecase: self.get_active_users_usecase,
        });

        Router::new()
            .route("/messages", get(get_messages).post(post_message))
            .route("/users", get(get_active_users))
            .route("/ping", post(record_ping))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the chat server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    pub async fn serve(self, listener: TcpListener) -> Result<(), Box<dyn std::error::Error>> {
        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, self.into_router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
