use crate::cli::{formatters, QuotesCommands};
use crate::error::Result;

use super::{print_json, Ctx};

pub async fn dispatch_quotes(ctx: &Ctx, action: QuotesCommands) -> Result<()> {
    use anyhow::Context;

    match action {
        QuotesCommands::Get { ticker } => {
            let ticker = ticker.to_uppercase();
            let quote = ctx
                .client
                .get_quote(&ticker)
                .await
                .with_context(|| format!("Failed to fetch quote for {}", ticker))?;

            if ctx.json {
                return print_json(&quote);
            }
            println!("{}", formatters::format_quote(&quote));
            Ok(())
        }

        QuotesCommands::Batch { tickers } => {
            let tickers: Vec<String> = tickers.iter().map(|t| t.to_uppercase()).collect();
            let quotes = ctx
                .client
                .batch_quotes(&tickers)
                .await
                .context("Failed to fetch quotes")?;

            if ctx.json {
                return print_json(&quotes);
            }
            println!("{}", formatters::format_quotes_table(&quotes));
            Ok(())
        }

        QuotesCommands::Portfolio => {
            let quotes = ctx
                .client
                .portfolio_quotes()
                .await
                .context("Failed to fetch portfolio quotes")?;

            if ctx.json {
                return print_json(&quotes);
            }
            if quotes.is_empty() {
                println!("{}", formatters::format_empty_list("held positions"));
                return Ok(());
            }
            println!("{}", formatters::format_quotes_table(&quotes));
            Ok(())
        }

        QuotesCommands::ClearCache { ticker } => {
            let ticker = ticker.map(|t| t.to_uppercase());
            let ack = ctx
                .client
                .clear_quote_cache(ticker.as_deref())
                .await
                .context("Failed to clear quote cache")?;

            if ctx.json {
                return print_json(&serde_json::json!({
                    "status": ack.status,
                    "message": ack.message,
                }));
            }
            println!("{}", formatters::format_success(&ack.message));
            Ok(())
        }
    }
}
