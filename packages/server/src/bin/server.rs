//! Polling chat server with presence tracking.
//!
//! Clients post messages, poll the message log, and ping to stay listed as
//! active users. All state lives in memory and is lost on restart.
//!
//! Run with:
//! ```not_rust
//! HTTPCHATSERVER_PORT_NUMBER=8080 cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 127.0.0.1 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use hiroba_server::{
    infrastructure::repository::InMemoryChatRoom,
    ui::Server,
    usecase::{GetActiveUsersUseCase, GetMessagesUseCase, PostMessageUseCase, RecordPingUseCase},
};
use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "In-memory polling chat server with presence tracking", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HTTPCHATSERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "HTTPCHATSERVER_PORT_NUMBER")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    // A missing or invalid port exits here with a usage error
    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. ChatRoom (in-memory repository)
    // 2. UseCases
    // 3. Server

    // 1. Create ChatRoom
    let chat_room = Arc::new(InMemoryChatRoom::new());
    tracing::info!("Chat room created");

    // 2. Create UseCases
    let post_message_usecase = Arc::new(PostMessageUseCase::new(chat_room.clone()));
    let get_messages_usecase = Arc::new(GetMessagesUseCase::new(chat_room.clone()));
    let record_ping_usecase = Arc::new(RecordPingUseCase::new(chat_room.clone()));
    let get_active_users_usecase = Arc::new(GetActiveUsersUseCase::new(chat_room));

    // 3. Create and run the server
    let server = Server::new(
        post_message_usecase,
        get_messages_usecase,
        record_ping_usecase,
        get_active_users_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Error starting server: {}", e);
        std::process::exit(1);
    }
}
