use anyhow::Context;
use buzzword_bingo::adapters::html;
use buzzword_bingo::config::cli::{Cli, Command, RenderArgs, ServeArgs};
use buzzword_bingo::core::bingo::generate_card;
use buzzword_bingo::domain::model::CardPage;
use buzzword_bingo::utils::error::{BingoError, ErrorSeverity};
use buzzword_bingo::utils::logger;
use buzzword_bingo::{router, AppState, BingoService, LocalStorage, UsageStore, WordListLoader};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let outcome = match &cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Render(args) => render(args),
    };

    if let Err(e) = outcome {
        let Some(err) = e.downcast_ref::<BingoError>() else {
            return Err(e);
        };
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            err,
            err.category(),
            err.severity()
        );
        eprintln!("❌ {}", err.user_friendly_message());
        eprintln!("💡 {}", err.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match err.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn serve(args: &ServeArgs) -> anyhow::Result<()> {
    let settings = args.resolve()?;
    let words_dir = settings.words_dir()?;

    let loader = WordListLoader::new(LocalStorage::new(words_dir), settings.defaults.clone());
    let usage = UsageStore::new(LocalStorage::new(""), settings.stats_file.clone());
    let service = BingoService::new(loader, usage, settings.layout);
    let state = AppState::new(Arc::new(service), settings.resource_path.as_str());

    let addr: SocketAddr = settings
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", settings.bind))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        words_dir,
        stats_file = %settings.stats_file,
        resource_path = %settings.resource_path,
        rows = settings.layout.rows,
        cols = settings.layout.cols,
        "bingo server listening on http://{}",
        addr
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("bingo server stopped");
    Ok(())
}

fn render(args: &RenderArgs) -> anyhow::Result<()> {
    let settings = args.resolve()?;
    let list = settings.defaults.from_file(&args.json_file)?;
    let identifier = args
        .json_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let card = generate_card(&identifier, &list, settings.layout, &mut rng)?;
    let grid = card.grid(settings.layout)?;

    let page = CardPage {
        identifier,
        title: card.title,
        shout: card.shout,
        grid,
        visits: 0,
    };
    println!("{}", html::card_page(&page, &settings.resource_path));
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
