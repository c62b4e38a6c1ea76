use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use portfolio_relay::{cli, config, mailer, server};
use cli::Cli;
use config::RelayConfig;
use mailer::SmtpMailer;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env は CLI 引数の env フォールバックより先に読み込む
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .parse_env(Env::new().filter("PORTFOLIO_LOG"))
        .init();

    match dotenv {
        Ok(path) => log::debug!(".env を読み込みました: {}", path.display()),
        Err(e) if e.not_found() => log::debug!(".env なし"),
        Err(e) => log::warn!(".env の読み込みに失敗: {}", e),
    }

    let config = RelayConfig::from_env()?;
    log::info!(
        "SMTP: {}:{} (secure={})",
        config.smtp.host,
        config.smtp.port,
        config.smtp.secure
    );
    if let Err(e) = config.credentials() {
        log::warn!("SMTP認証情報が未設定です（送信は失敗します）: {}", e);
    }

    if !cli.static_root.join("index.html").exists() {
        log::warn!("index.html が見つかりません: {}", cli.static_root.display());
    }

    let state = AppState::new(config, SmtpMailer);
    let app = server::router(state, &cli.static_root);

    let addr = format!("{}:{}", cli.bind, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Server running on http://localhost:{}", cli.port);

    axum::serve(listener, app).await?;
    Ok(())
}
