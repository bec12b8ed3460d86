use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use taskd::config::TaskdConfig;
use taskd::{rest, AppContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "taskd", about = "taskd — minimal task-tracking REST daemon", version)]
struct Args {
    /// HTTP listen port
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Basic auth username (auth is enabled only together with --auth-pass)
    #[arg(long, env = "TASKD_AUTH_USER")]
    auth_user: Option<String>,

    /// Basic auth password
    #[arg(long, env = "TASKD_AUTH_PASS")]
    auth_pass: Option<String>,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, env = "TASKD_LOG")]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = TaskdConfig::new(args.port, args.auth_user, args.auth_pass, args.log);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ctx = Arc::new(AppContext::new(config));
    rest::start_rest_server(ctx).await
}
