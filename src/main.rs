use clap::Parser;
use zuripay::config::cli::{exit_code, Cli, LogFormat};
use zuripay::utils::logger;
use zuripay::{ApiResponse, ZuriPay};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::debug!("Command: {:?}", cli.command);

    match run(&cli).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(e) => {
            tracing::debug!("Request failed: {:?}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}

async fn run(cli: &Cli) -> zuripay::Result<ApiResponse> {
    let config = cli.load_config()?;
    let zuripay = ZuriPay::from_config(&config)?;
    cli.command.dispatch(&zuripay).await
}
