mod cli;
mod core;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cdash", about = "AWS cost dashboard CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(short = 'j', long = "json", global = true)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and display cost reports
    Report {
        /// Account to report on (default: all enabled)
        #[arg(short, long)]
        account: Option<String>,

        /// Period to show (daily|weekly|monthly|all)
        #[arg(short, long)]
        period: Option<String>,

        /// Keep refreshing the dashboard on a timer
        #[arg(long)]
        watch: bool,

        /// Refresh interval in seconds (default from config)
        #[arg(long)]
        interval: Option<u64>,
    },
    /// Manage stored accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Store a new account
    Add {
        /// 12-digit AWS account ID
        #[arg(long)]
        id: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// Access key ID
        #[arg(long)]
        access_key_id: String,
        /// Secret access key
        #[arg(long)]
        secret_access_key: String,
    },
    /// List stored accounts
    List,
    /// Show one stored account
    Show {
        /// Account ID to show
        account: String,
    },
    /// Delete a stored account
    Remove {
        /// Account ID to delete
        account: String,
    },
    /// Include an account in reports
    Enable {
        /// Account ID to enable
        account: String,
    },
    /// Exclude an account from reports
    Disable {
        /// Account ID to disable
        account: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Generate default config file
    Init,
    /// Validate config file
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = crate::core::config::AppConfig::load()
        .unwrap_or_default()
        .settings;

    let output_opts = cli::output::OutputOptions {
        format: if cli.json {
            cli::output::OutputFormat::Json
        } else {
            let id = cli.format.as_deref().unwrap_or(&settings.default_format);
            cli::output::OutputFormat::from_id(id)
        },
        pretty: cli.pretty,
        use_color: cli::output::resolve_color(!cli.no_color, &settings.color),
        verbose: cli.verbose,
    };

    match cli.command {
        None | Some(Commands::Report { .. }) => {
            let (account, period, watch, interval) = match cli.command {
                Some(Commands::Report {
                    account,
                    period,
                    watch,
                    interval,
                }) => (account, period, watch, interval),
                _ => (None, None, false, None),
            };
            cli::report_cmd::run(account, period, watch, interval, &output_opts).await?;
        }
        Some(Commands::Account { action }) => match action {
            AccountAction::Add {
                id,
                name,
                access_key_id,
                secret_access_key,
            } => cli::account_cmd::add(&id, &name, &access_key_id, &secret_access_key, &output_opts)?,
            AccountAction::List => cli::account_cmd::list(&output_opts)?,
            AccountAction::Show { account } => cli::account_cmd::show(&account, &output_opts)?,
            AccountAction::Remove { account } => cli::account_cmd::remove(&account, &output_opts)?,
            AccountAction::Enable { account } => {
                cli::account_cmd::set_enabled(&account, true, &output_opts)?
            }
            AccountAction::Disable { account } => {
                cli::account_cmd::set_enabled(&account, false, &output_opts)?
            }
        },
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => cli::config_cmd::init(&output_opts)?,
            ConfigAction::Check => cli::config_cmd::check(&output_opts)?,
        },
    }

    Ok(())
}
