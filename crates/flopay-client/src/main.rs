use std::path::{Path, PathBuf};

use clap::Parser;
use flopay::ENV_BASE_URL;
use flopay_client::{FlopayClient, FlopayConfig, FlopayError, TransferInput};

/// Authorize with Flopay and send one mobile-money transfer.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// JSON file holding the transfer input (snake_case or camelCase keys).
    #[arg(value_name = "TRANSFER_FILE")]
    pub input: PathBuf,

    /// API host, overriding the production default.
    #[arg(long, env = ENV_BASE_URL)]
    pub base_url: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flopay=info,flopay_client=info".into()),
        )
        .init();

    let args = CliArgs::parse();

    if let Err(e) = run(args).await {
        match &e {
            FlopayError::Provider(p) => eprintln!("Transfer rejected: {p}"),
            other => eprintln!("Error: {other}"),
        }
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> Result<(), FlopayError> {
    let input = read_input(&args.input)?;

    let mut config = FlopayConfig::from_env()?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let mut client = FlopayClient::from_config(config)?;
    println!("Authorizing against: {}", client.base_url());
    client.authorize().await?;

    println!(
        "Sending {} {} to {}\n",
        input.recipient_amount, input.recipient_currency, input.recipient_no
    );
    let output = client.transfer(input).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn read_input(path: &Path) -> Result<TransferInput, FlopayError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_input_and_base_url() {
        let args = CliArgs::try_parse_from([
            "flopay-cli",
            "transfer.json",
            "--base-url",
            "http://localhost:9000",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("transfer.json"));
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_input_file_is_required() {
        assert!(CliArgs::try_parse_from(["flopay-cli"]).is_err());
    }

    #[test]
    fn test_read_input_errors_are_typed() {
        let missing = read_input(Path::new("/nonexistent/flopay/transfer.json"));
        assert!(matches!(missing, Err(FlopayError::Io(_))));

        let path = std::env::temp_dir().join(format!("flopay-cli-{}.json", std::process::id()));
        std::fs::write(&path, b"{not json").unwrap();
        let garbled = read_input(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(garbled, Err(FlopayError::Serde(_))));
    }

    #[test]
    fn test_read_input_camel_case_file() {
        let path = std::env::temp_dir().join(format!("flopay-cli-ok-{}.json", std::process::id()));
        std::fs::write(
            &path,
            br#"{"senderAmount": 10, "senderCurrency": "GHS", "recipientAmount": 10,
                "recipientCurrency": "GHS", "recipientNo": "0551234567",
                "countryCode": "GH", "serviceCode": "MOMO",
                "callbackURLs": ["https://merchant.example/cb"]}"#,
        )
        .unwrap();
        let input = read_input(&path);
        std::fs::remove_file(&path).ok();

        let input = input.unwrap();
        assert_eq!(input.recipient_no, "0551234567");
        assert_eq!(
            input.callback_urls,
            Some(vec!["https://merchant.example/cb".to_string()])
        );
    }
}
