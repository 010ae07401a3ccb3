#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::{Args, Command, DemoArgs};
use clap::Parser;
use faultline_config::Config;
use faultline_core::{
    DisplaySettingsPatch, FormatOptions, NOT_FOUND_ERROR, Reporter, StructuredError, catalog, create_error,
    make_named_error,
};
use faultline_server::Server;
use serde_json::json;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };

    faultline_telemetry::init(&config.logging)?;

    let mut reporter = Reporter::new(config.display);
    faultline_telemetry::bind_forwarding(&mut reporter, &config.logging)?;

    match args.command {
        Command::Demo(demo_args) => demo(&mut reporter, &demo_args)?,
        Command::Catalog => print_catalog(),
        Command::Serve { listen } => serve(config, reporter, listen).await?,
    }

    Ok(())
}

fn demo(reporter: &mut Reporter, args: &DemoArgs) -> anyhow::Result<()> {
    // Flags only switch options on; config still decides the rest
    reporter.configure(DisplaySettingsPatch {
        show_emoji: args.emoji.then_some(true),
        default_compact: args.compact.then_some(true),
        colorize: args.color.then_some(true),
    });

    let errors: Vec<StructuredError> = if args.codes.is_empty() {
        vec![
            NOT_FOUND_ERROR.create(None, json!({ "userId": 42 }).as_object().cloned()),
            create_error("Something went wrong", Some(500), json!({ "debug": true }).as_object().cloned()),
            create_error("Bad Request", Some(400), json!({ "field": "email" }).as_object().cloned()),
        ]
    } else {
        args.codes
            .iter()
            .map(|code| make_named_error(*code).create(None, None))
            .collect()
    };

    for err in &errors {
        reporter.report(err, FormatOptions::default());
        if args.json {
            println!("{}", serde_json::to_string_pretty(&err.to_structured())?);
        }
    }

    Ok(())
}

fn print_catalog() {
    for (code, info) in catalog::entries() {
        println!("{code}  {}  {:<12}  {}", info.emoji, info.category, info.default_msg);
    }
}

async fn serve(mut config: Config, reporter: Reporter, listen: Option<std::net::SocketAddr>) -> anyhow::Result<()> {
    if let Some(listen) = listen {
        config.server.listen_address = listen;
    }

    tracing::info!(listen_address = %config.server.listen_address, "starting faultline demo server");

    let server = Server::new(&config, reporter);

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    server.serve(shutdown).await?;

    tracing::info!("faultline stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
