use anyhow::Result;

use crate::cli::output::OutputOptions;
use crate::core::config::{AccountEntry, AppConfig};
use crate::core::fetch::validate_account_id;

pub fn add(
    account_id: &str,
    account_name: &str,
    access_key_id: &str,
    secret_access_key: &str,
    _opts: &OutputOptions,
) -> Result<()> {
    if let Err(e) = validate_account_id(account_id) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    if account_name.trim().is_empty() {
        eprintln!("Account name must not be empty");
        std::process::exit(1);
    }

    let mut config = AppConfig::load()?;

    if config.find_account(account_id).is_some() {
        eprintln!("Account '{}' already exists", account_id);
        std::process::exit(1);
    }

    config.accounts.push(AccountEntry {
        account_id: account_id.to_string(),
        account_name: account_name.to_string(),
        access_key_id: access_key_id.to_string(),
        secret_access_key: secret_access_key.to_string(),
        enabled: true,
    });

    let path = config.save()?;
    println!("Added account '{}' ({}) to {}", account_name, account_id, path.display());
    Ok(())
}

pub fn list(_opts: &OutputOptions) -> Result<()> {
    let config = AppConfig::load()?;

    if config.accounts.is_empty() {
        println!("No accounts stored. Run `cdash account add` to store one.");
        return Ok(());
    }

    println!(
        "{:<14} {:<16} {:<22} {:<10} {}",
        "ACCOUNT ID", "NAME", "ACCESS KEY", "SECRET", "STATE"
    );
    for entry in &config.accounts {
        let account = entry.to_account();
        println!(
            "{:<14} {:<16} {:<22} {:<10} {}",
            entry.account_id,
            entry.account_name,
            entry.access_key_id,
            account.masked_secret(),
            if entry.enabled { "enabled" } else { "disabled" }
        );
    }
    Ok(())
}

pub fn show(account_id: &str, _opts: &OutputOptions) -> Result<()> {
    let config = AppConfig::load()?;

    let entry = match config.find_account(account_id) {
        Some(e) => e,
        None => {
            eprintln!("Unknown account: '{}'", account_id);
            std::process::exit(1);
        }
    };

    let account = entry.to_account();
    println!("Account ID:  {}", entry.account_id);
    println!("Name:        {}", entry.account_name);
    println!("Access Key:  {}", entry.access_key_id);
    println!("Secret Key:  {}", account.masked_secret());
    println!("State:       {}", if entry.enabled { "enabled" } else { "disabled" });
    Ok(())
}

pub fn remove(account_id: &str, _opts: &OutputOptions) -> Result<()> {
    let mut config = AppConfig::load()?;

    let before = config.accounts.len();
    config.accounts.retain(|a| a.account_id != account_id);
    if config.accounts.len() == before {
        eprintln!("Unknown account: '{}'", account_id);
        std::process::exit(1);
    }

    config.save()?;
    println!("Removed account '{}'", account_id);
    Ok(())
}

pub fn set_enabled(account_id: &str, enabled: bool, _opts: &OutputOptions) -> Result<()> {
    let mut config = AppConfig::load()?;

    match config.find_account_mut(account_id) {
        Some(entry) if entry.enabled == enabled => {
            eprintln!(
                "Account '{}' is already {}",
                account_id,
                if enabled { "enabled" } else { "disabled" }
            );
            std::process::exit(1);
        }
        Some(entry) => {
            entry.enabled = enabled;
        }
        None => {
            eprintln!("Unknown account: '{}'", account_id);
            std::process::exit(1);
        }
    }

    config.save()?;
    println!(
        "{} account '{}'",
        if enabled { "Enabled" } else { "Disabled" },
        account_id
    );
    Ok(())
}
