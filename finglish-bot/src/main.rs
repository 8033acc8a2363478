//! finglish-bot binary: webhook server, polling bot, and offline conversion.

use anyhow::Result;
use behnevis_client::BehnevisClient;
use clap::Parser;
use finglish_bot::{
    convert_text, format_rules, load_config, read_input, run_polling, run_webhook, Cli, Commands,
};
use transliterator::{LocalTransliterator, Transliterate};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { token, addr } => {
            let mut config = load_config(token)?;
            if let Some(addr) = addr {
                config.webhook_addr = addr;
            }
            run_webhook(config).await
        }
        Commands::Poll { token } => {
            let config = load_config(token)?;
            run_polling(config).await
        }
        Commands::Convert { text, raw, remote } => {
            let input = read_input(text)?;
            let backend: Box<dyn Transliterate> = if remote {
                match std::env::var("BEHNEVIS_API_URL") {
                    Ok(url) => Box::new(BehnevisClient::with_api_url(url)?),
                    Err(_) => Box::new(BehnevisClient::new()?),
                }
            } else {
                Box::new(LocalTransliterator::new())
            };
            println!("{}", convert_text(&input, raw, backend.as_ref()).await?);
            Ok(())
        }
        Commands::Rules => {
            print!("{}", format_rules());
            Ok(())
        }
    }
}
