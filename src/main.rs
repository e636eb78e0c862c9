use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use smartsend::{cli, config, error, gateway, loader, report};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, SmartSendError};
use smartsend_common::{share_text, AppState, Event, Session, GENERIC_ERROR_MESSAGE};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    );

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, output, edit, model, timeout } => {
            println!("📦 smartsend - 荷物解析\n");

            let mut config = config;
            if let Some(model) = model {
                config.model = model;
            }
            if let Some(timeout) = timeout {
                config.timeout_seconds = timeout;
            }
            let api_key = config.get_api_key()?;

            // 1. 画像読み込み
            println!("[1/2] 画像を読み込み中...");
            let captured = loader::load_image(&image, config.max_image_size)?;
            println!("✔ {} ({})\n", image.display(), captured.media_type());

            // 2. AI解析
            println!("[2/2] AI解析中...");
            let gateway = gateway::GeminiGateway::new(api_key, &config)?;
            let mut session = Session::new(gateway);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("寸法・重量・配送料金を推定しています...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let state = session.dispatch(Event::Upload(captured)).await;
            spinner.finish_and_clear();

            if state? != AppState::Results {
                let message = session
                    .controller()
                    .error_message()
                    .unwrap_or(GENERIC_ERROR_MESSAGE)
                    .to_string();
                return Err(SmartSendError::Analysis(message));
            }
            println!("✔ 解析完了\n");

            if edit {
                let current = session
                    .controller()
                    .estimate()
                    .map(|e| e.description.clone())
                    .unwrap_or_default();
                let description: String = dialoguer::Input::new()
                    .with_prompt("説明")
                    .with_initial_text(current)
                    .interact_text()
                    .map_err(|e| SmartSendError::Prompt(e.to_string()))?;
                session.dispatch(Event::EditDescription(description)).await?;
            }

            let estimate = session
                .controller()
                .estimate()
                .cloned()
                .ok_or_else(|| SmartSendError::Analysis(GENERIC_ERROR_MESSAGE.to_string()))?;

            println!("📋 解析結果");
            println!("{}\n", report::format_estimate(&estimate));

            if let Some(output) = output {
                report::SavedReport::new(&image, estimate.clone()).save(&output)?;
                println!("✔ 結果を保存: {}\n", output.display());
            }

            println!("{}", share_text(&estimate));
        }

        Commands::Share { input } => {
            let estimate = report::load_estimate(&input)?;
            println!("{}", share_text(&estimate));
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  最大画像サイズ: {}px", config.max_image_size);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  temperature: {}", config.temperature);
                println!(
                    "  APIキー: {}",
                    if config.get_api_key().is_ok() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}
