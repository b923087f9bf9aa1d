use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use text_analyzer::analysis::{char_count, AnalysisClient, RequestBuilder};
use text_analyzer::cli::{AnalyzeArgs, Cli, Commands};
use text_analyzer::clipboard::ClipboardHandler;
use text_analyzer::config::Config;
use text_analyzer::logging::init_tracing;
use text_analyzer::render::{render_tones, render_view};
use text_analyzer::session::AnalysisSession;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Tones => {
            print!("{}", render_tones());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Analyze(args) => analyze(cli.config, args).await,
    }
}

async fn analyze(config_path: Option<PathBuf>, args: AnalyzeArgs) -> Result<ExitCode> {
    let mut config = match &config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    args.apply_to(&mut config);
    config.validate()?;

    let text = read_input(&args)?;
    let builder = RequestBuilder::new(config.input.max_text_length);
    if builder.is_near_limit(&text) {
        eprintln!(
            "Warning: near limit ({} / {} characters)",
            char_count(&text),
            builder.max_text_length()
        );
    }

    let client =
        AnalysisClient::new(&config.api.base_url).context("Failed to build HTTP client")?;
    tracing::debug!(endpoint = client.endpoint(), "Using analysis service");
    let session = AnalysisSession::new(Arc::new(client), builder);

    let mut views = session.subscribe();
    let progress = tokio::spawn(async move {
        while views.changed().await.is_ok() {
            if views.borrow_and_update().loading {
                eprintln!("Analyzing...");
            }
        }
    });

    let timeout_seconds = config.api.timeout_seconds;
    let settled = if timeout_seconds == 0 {
        session.submit(&text, args.tone).await;
        true
    } else {
        tokio::time::timeout(
            Duration::from_secs(timeout_seconds),
            session.submit(&text, args.tone),
        )
        .await
        .is_ok()
    };
    progress.abort();

    if !settled {
        session.reset();
        eprintln!("Error: Analysis timed out after {}s", timeout_seconds);
        return Ok(ExitCode::from(1));
    }

    let view = session.view();
    let Some(result) = &view.result else {
        eprint!("{}", render_view(&view));
        return Ok(ExitCode::from(1));
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render_view(&view));
    }

    if let Some(section) = args.copy {
        match ClipboardHandler::new().and_then(|mut cb| cb.copy_section(result, section)) {
            Ok(()) => eprintln!("Copied {} to clipboard", section.name()),
            Err(err) => eprintln!("Warning: {}", err),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Text from the positional argument, `--file`, or piped stdin.
fn read_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("No text provided: pass TEXT, --file, or pipe text on stdin");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}
