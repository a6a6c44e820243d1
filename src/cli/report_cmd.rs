use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{OutputFormat, OutputOptions};
use crate::cli::renderer;
use crate::core::config::AppConfig;
use crate::core::fetch::{BillingSource, SyntheticSource};
use crate::core::models::account::AwsAccount;
use crate::core::models::cost::{CostReport, Period};

#[derive(Serialize)]
struct AccountPayload {
    account_id: String,
    account_name: String,
    report: CostReport,
}

pub async fn run(
    account_filter: Option<String>,
    period_filter: Option<String>,
    watch: bool,
    interval: Option<u64>,
    opts: &OutputOptions,
) -> Result<()> {
    let config = AppConfig::load().unwrap_or_default();

    let periods: Vec<Period> = match period_filter.as_deref() {
        None | Some("all") => Period::all().to_vec(),
        Some(id) => match Period::from_id(id) {
            Some(p) => vec![p],
            None => {
                eprintln!("Unknown period: '{}' (expected daily|weekly|monthly|all)", id);
                std::process::exit(1);
            }
        },
    };

    // Determine which accounts to report on
    let accounts: Vec<AwsAccount> = if let Some(filter) = &account_filter {
        match config.find_account(filter) {
            Some(entry) => vec![entry.to_account()],
            None => {
                eprintln!("Unknown account: '{}'", filter);
                std::process::exit(1);
            }
        }
    } else {
        config.enabled_accounts()
    };

    if accounts.is_empty() {
        eprintln!("No accounts configured. Run `cdash account add` to store one.");
        return Ok(());
    }

    let source: Arc<dyn BillingSource> = Arc::new(SyntheticSource::new(config.account_directory()));

    if watch {
        if opts.format == OutputFormat::Json {
            anyhow::bail!("--watch is only supported with text output");
        }
        let secs = interval.unwrap_or(config.settings.refresh_secs).max(1);
        let mut ticker = tokio::time::interval(Duration::from_secs(secs));
        loop {
            ticker.tick().await;
            // Each tick redraws from scratch, so the newest result always
            // replaces whatever was on screen.
            print!("\x1b[2J\x1b[H");
            render_once(&accounts, &periods, source.clone(), opts).await?;
        }
    }

    render_once(&accounts, &periods, source, opts).await
}

async fn render_once(
    accounts: &[AwsAccount],
    periods: &[Period],
    source: Arc<dyn BillingSource>,
    opts: &OutputOptions,
) -> Result<()> {
    // Fetch all accounts concurrently
    let handles: Vec<_> = accounts
        .iter()
        .cloned()
        .map(|account| {
            let source = source.clone();
            tokio::spawn(async move {
                let result = source.fetch(&account);
                (account, result)
            })
        })
        .collect();

    let mut results: Vec<(AwsAccount, CostReport)> = Vec::new();
    let mut errors: Vec<(AwsAccount, String)> = Vec::new();

    for handle in handles {
        let (account, result) = handle.await?;
        match result {
            Ok(report) => results.push((account, report)),
            Err(e) => errors.push((account, format!("{:#}", e))),
        }
    }

    match opts.format {
        OutputFormat::Text => {
            let mut sections: Vec<String> = Vec::new();
            for (account, report) in &results {
                sections.push(renderer::render_account(
                    account,
                    report,
                    periods,
                    opts.use_color,
                ));
            }
            for (account, err) in &errors {
                sections.push(renderer::render_error(account, err, opts.use_color));
            }
            println!("{}", sections.join("\n\n"));
        }
        OutputFormat::Json => {
            let payloads: Vec<AccountPayload> = results
                .into_iter()
                .map(|(account, report)| AccountPayload {
                    account_id: account.account_id,
                    account_name: account.account_name,
                    report,
                })
                .collect();

            let json = if opts.pretty {
                serde_json::to_string_pretty(&payloads)?
            } else {
                serde_json::to_string(&payloads)?
            };
            println!("{}", json);

            if !errors.is_empty() && opts.verbose {
                for (account, err) in &errors {
                    eprintln!("Error fetching {}: {}", account.account_name, err);
                }
            }
        }
    }

    Ok(())
}
