/// Atrium Admin - command-line console for the Atrium admin API
use atrium_admin::{AdminConfig, AdminError, Cli, Console};
use atrium_core::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atrium_admin=info,atrium_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AdminConfig::load(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!("API: {}", config.api.base_url);

    let console = Console::connect(&config)?;
    match console.run(cli.command).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err);
            if let AdminError::Api(api) = &err {
                if api.is(ErrorKind::Unauthorized) {
                    eprintln!("Run `atrium-admin login` to start a new session.");
                }
            }
            std::process::exit(err.exit_code());
        }
    }
}
