use color_eyre::Result;
use zoneblog::cli::{parse_args, run_cli_command};
use zoneblog::logging::init_logging;
use zoneblog::{BlogClient, ClientConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let command = parse_args(std::env::args());
    let client = BlogClient::new(ClientConfig::from_env())?;

    let mut stdout = std::io::stdout();
    if let Err(e) = run_cli_command(&client, command, &mut stdout).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
