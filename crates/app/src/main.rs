use std::io;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use app::config::{self, Command, DrillConfig, ListConfig, ServeConfig};
use app::drill::{print_lists, print_report, run_drill, save_missed};
use app::logging::init_tracing;
use app::{AppState, routes};
use drill_core::model::WordBank;
use services::{BankService, Clock, SessionRegistry, shuffled};
use storage::repository::Storage;
use storage::wordlists::load_word_list_file;

async fn serve(config: ServeConfig) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(&config.log_level);

    let storage = Storage::word_lists(&config.words).await?;
    let registry = SessionRegistry::new(Clock::system(), BankService::new(storage.banks))
        .with_default_bank(config.default_bank)
        .with_shuffle(config.shuffle);

    let app = routes::router(AppState::new(registry))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, words = %config.words.display(), "drill server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("drill server stopped");
    Ok(())
}

async fn drill(config: DrillConfig) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(&config.log_level);

    let mut banks = Vec::with_capacity(config.files.len());
    for file in &config.files {
        banks.push(load_word_list_file(file).await?);
    }
    let mut bank = WordBank::merged(&banks)?;
    if config.flip {
        bank = bank.flip();
    }
    if config.shuffle {
        bank = shuffled(&bank)?;
    }

    let metadata = bank.metadata().clone();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let report = run_drill(Arc::new(bank), &Clock::system(), stdin.lock(), &mut stdout)?;
    print_report(&report, &config.files, &mut stdout)?;

    if let Some(path) = &config.save_missed {
        save_missed(path, &report.missed, &metadata)?;
        if !report.missed.is_empty() {
            println!("saved {} missed words to {}", report.missed.len(), path.display());
        }
    }
    Ok(())
}

async fn list(config: ListConfig) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(&config.log_level);

    let mut lists = Vec::with_capacity(config.files.len());
    for file in config.files {
        let bank = load_word_list_file(&file).await?;
        lists.push((file, bank));
    }
    print_lists(&lists, &mut io::stdout())?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = Command::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .inspect_err(|_| config::print_usage())?;

    match command {
        Command::Serve(serve_config) => serve(serve_config).await,
        Command::Drill(drill_config) => drill(drill_config).await,
        Command::List(list_config) => list(list_config).await,
        Command::Help => {
            config::print_usage();
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
