use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;

mod application;
mod domain;
mod infrastructure;

use application::messaging::{Dispatcher, UpdateParser};
use domain::entities::User;
use domain::traits::Bot;
use infrastructure::adapters::console::ConsoleAdapter;
use infrastructure::adapters::telegram::TelegramAdapter;
use infrastructure::config::Config;
use infrastructure::storage::MemoryPreferenceStore;
use infrastructure::whois::WhoisXmlClient;

#[derive(Parser)]
#[command(name = "whois-bot")]
#[command(about = "Telegram bot for WHOIS domain lookups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config, cli.token);
        }
        Commands::Version => {
            println!("whois-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_bot(config_path: String, token_override: Option<String>) {
    // File config when present, env overlay always (secrets stay out of yaml)
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };
    config.apply_env();

    tracing::info!("Starting {}", config.bot.name);

    let Some(api_key) = config.whois.api_key.clone() else {
        tracing::error!("No WHOIS API key configured (set WHOIS_API_KEY or whois.api-key)");
        return;
    };

    let whois = match WhoisXmlClient::new(
        config.whois.endpoint.clone(),
        api_key,
        Duration::from_secs(config.whois.timeout_seconds),
    ) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("Failed to build WHOIS client: {}", e);
            return;
        }
    };

    let store = Arc::new(MemoryPreferenceStore::new());
    let default_language = config.bot.default_language;

    let rt = tokio::runtime::Runtime::new().unwrap();

    if let Some(token) = token_override.or_else(|| config.telegram_token()) {
        rt.block_on(async {
            let mut adapter = TelegramAdapter::new(token);

            if let Err(e) = adapter.fetch_bot_info().await {
                tracing::error!("Failed to fetch bot info: {}", e);
                return;
            }
            if let Err(e) = adapter.register_commands().await {
                tracing::warn!("Failed to register commands: {}", e);
            }

            let adapter = Arc::new(adapter);
            let bot: Arc<dyn Bot> = adapter.clone();
            let dispatcher = Dispatcher::new(bot, store, whois, default_language);

            run_telegram_bot(adapter, dispatcher).await;
        });
    } else {
        // No token resolvable; run against stdin for local development
        rt.block_on(async {
            let adapter = Arc::new(ConsoleAdapter::new());
            let bot: Arc<dyn Bot> = adapter.clone();
            let dispatcher = Dispatcher::new(bot, store, whois, default_language);

            run_console_bot(adapter, dispatcher).await;
        });
    }
}

async fn run_telegram_bot(bot: Arc<TelegramAdapter>, dispatcher: Dispatcher) {
    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let parser = UpdateParser::new();
    let mut offset: i64 = 0;
    let timeout_seconds = 30;

    tracing::info!("Starting update loop...");

    loop {
        match bot.get_updates(offset, timeout_seconds).await {
            Ok(updates) => {
                if !updates.is_empty() {
                    offset = TelegramAdapter::get_next_offset(&updates);
                }

                for update in updates {
                    if let Some(msg) = update.message {
                        let Some(text) = msg.text else { continue };
                        if text.is_empty() {
                            continue;
                        }

                        let chat_id = msg.chat.id.to_string();
                        let sender = msg.from.map(to_domain_user);
                        let message = parser
                            .parse_text(chat_id, text, sender)
                            .with_platform("telegram");

                        if let Err(e) = dispatcher.dispatch(&message).await {
                            tracing::error!("Failed to handle message: {}", e);
                        }
                    } else if let Some(callback) = update.callback_query {
                        // Acknowledge first so the client stops its spinner
                        if let Err(e) = bot.answer_callback(&callback.id, None).await {
                            tracing::warn!("Failed to answer callback: {}", e);
                        }

                        let Some(data) = callback.data else { continue };
                        let chat_id = callback
                            .message
                            .as_ref()
                            .map(|m| m.chat.id.to_string())
                            .unwrap_or_else(|| callback.from.id.to_string());
                        let origin_message_id =
                            callback.message.as_ref().map(|m| m.message_id.to_string());
                        let user = to_domain_user(callback.from);

                        let message = parser
                            .parse_callback(chat_id, data, origin_message_id, user)
                            .with_platform("telegram");

                        if let Err(e) = dispatcher.dispatch(&message).await {
                            tracing::error!("Failed to handle callback: {}", e);
                        }
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to get updates: {}", e);
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
        }
    }
}

async fn run_console_bot(bot: Arc<ConsoleAdapter>, dispatcher: Dispatcher) {
    if let Err(e) = bot.start().await {
        tracing::error!("Failed to start bot: {}", e);
        return;
    }

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let parser = UpdateParser::new();
    let user = User::new("console");

    loop {
        let Some(input) = bot.read_line("> ").await else {
            break;
        };
        if input.is_empty() {
            continue;
        }

        // A "language:xx" line stands in for an inline-button press
        let message = if input.starts_with("language:") {
            parser
                .parse_callback("console", input, None, user.clone())
                .with_platform("console")
        } else {
            parser
                .parse_text("console", input, Some(user.clone()))
                .with_platform("console")
        };

        if let Err(e) = dispatcher.dispatch(&message).await {
            tracing::error!("Failed to handle input: {}", e);
        }
    }
}

fn to_domain_user(user: infrastructure::adapters::telegram::User) -> User {
    let mut domain_user = User::new(user.id.to_string());
    if let Some(username) = user.username {
        domain_user = domain_user.with_username(username);
    }
    domain_user.first_name = user.first_name;
    domain_user
}

fn init_config() {
    let config = Config::default();
    match serde_yaml::to_string(&config) {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
        }
        Err(e) => {
            tracing::error!("Failed to serialize default config: {}", e);
        }
    }
}
