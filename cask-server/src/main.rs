use cask_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment: .env + logging
    setup_environment();
    print_banner();

    // 2. Configuration
    let config = Config::from_env();
    tracing::info!(
        port = config.port,
        data_file = %config.data_file.display(),
        environment = %config.environment,
        "configuration loaded"
    );

    // 3. Document store (fails fast on an unreadable data file)
    let state = ServerState::initialize(&config).await?;

    // 4. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("server exited with error: {e}");
        return Err(e.into());
    }

    Ok(())
}
