use std::{process, sync::Arc};

use scorta::{
    config,
    error::AppError,
    infra::{
        error::InfraError,
        http::{self, AppState},
        storage::{DocumentStore, InitOutcome},
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let store = Arc::new(DocumentStore::new(settings.storage.data_file.clone()));

    match store.ensure_exists().await? {
        InitOutcome::Created => info!(
            target = "scorta::startup",
            path = %store.path().display(),
            "collection document created"
        ),
        InitOutcome::Existing => info!(
            target = "scorta::startup",
            path = %store.path().display(),
            "collection document exists"
        ),
    }

    let router = http::build_router(AppState { store }, &settings.cors);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "scorta::startup",
        addr = %settings.server.addr,
        "listening"
    );

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    Ok(())
}
