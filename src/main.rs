use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use po_viewer::{cli, client, config, error, logging, render};
use po_viewer_common::view::{details_view, file_viewer_view, invoice_form_view, po_list_view};
use po_viewer_common::{MainTab, ViewerState};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

use cli::{Cli, Commands};
use client::PoClient;
use config::Config;
use error::{PoViewerError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;
    let config = Config::load()?;

    match cli.command {
        Commands::List => {
            let client = PoClient::from_config(&config)?;
            let mut state = ViewerState::new();
            state.begin_listing();
            state.finish_listing(Ok(client.list_pos().await?));
            print!("{}", render::render_po_list(&po_list_view(&state)));
        }

        Commands::Show { key, tab } => {
            let client = PoClient::from_config(&config)?;
            let mut state = ViewerState::new();
            state.begin_listing();
            state.finish_listing(Ok(client.list_pos().await?));

            let po = state
                .find(&key)
                .cloned()
                .ok_or_else(|| PoViewerError::PoNotFound(key.clone()))?;
            let ticket = state.select(po);
            state.set_active_tab(tab.into());
            println!("📄 {}\n", ticket.filename);

            // ドキュメントタブは抽出を待たずに表示できる
            if state.active_tab() != MainTab::Document {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(ProgressStyle::default_spinner());
                spinner.set_message(format!("{} を解析中...", ticket.filename));
                spinner.enable_steady_tick(Duration::from_millis(100));

                let result = client.parse_po(&ticket.filename).await;
                spinner.finish_and_clear();

                if let Err(e) = &result {
                    error!(filename = %ticket.filename, "Failed to extract data: {e}");
                }
                state.complete_extraction(&ticket, result);
            }

            let text = match state.active_tab() {
                MainTab::Document => {
                    render::render_file_viewer(&file_viewer_view(client.routes(), state.selected()))
                }
                MainTab::Details => render::render_details(details_view(&state).as_ref()),
                MainTab::Invoice => render::render_invoice_form(invoice_form_view(&state).as_ref()),
            };
            print!("{text}");
        }

        Commands::Parse { filename, output } => {
            let client = PoClient::from_config(&config)?;
            let data = client.parse_po(&filename).await?;
            let json = serde_json::to_string_pretty(&data)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ 抽出結果を保存: {}", path.display());
                }
                None => println!("{json}"),
            }
        }

        Commands::Fetch { filename, output } => {
            let client = PoClient::from_config(&config)?;
            let bytes = client.fetch_file(&filename).await?;
            let path = output.unwrap_or_else(|| default_download_path(&filename));
            std::fs::write(&path, &bytes)?;
            println!("✔ {} bytes を保存: {}", bytes.len(), path.display());
        }

        Commands::OpenFolder => {
            let client = PoClient::from_config(&config)?;
            if let Err(e) = client.open_folder().await {
                error!("Failed to open folder: {e}");
                return Err(e.into());
            }
            println!("✔ フォルダを開きました");
        }

        Commands::Health => {
            let client = PoClient::from_config(&config)?;
            let health = client.health().await?;
            if !health.is_ok() {
                return Err(PoViewerError::Unhealthy(health.status));
            }
            info!(url = client.routes().base(), "service healthy");
            println!("✔ {}: {}", client.routes().base(), health.status);
        }

        Commands::Config { set_url, set_timeout, show } => {
            let mut config = config;
            let changed = set_url.is_some() || set_timeout.is_some();

            if let Some(url) = set_url {
                config.set_service_url(url)?;
                println!("✔ サービスURLを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.timeout_seconds = (seconds > 0).then_some(seconds);
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  サービスURL: {}", config.service_url);
                println!(
                    "  タイムアウト: {}",
                    config
                        .timeout_seconds
                        .map(|s| format!("{s}秒"))
                        .unwrap_or_else(|| "なし".into())
                );
                if let Ok(url) = std::env::var(config::SERVICE_URL_ENV) {
                    println!("  {} (優先): {}", config::SERVICE_URL_ENV, url);
                }
            }
        }
    }

    Ok(())
}

/// ファイル名からディレクトリ部分を除いた保存先
fn default_download_path(filename: &str) -> PathBuf {
    Path::new(filename)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("download.bin"))
}
