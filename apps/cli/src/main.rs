//! Syna CLI - 命令行交互接口

mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use syna_cognitive::{DispatchOutcome, Dispatcher};

use crate::config::{AppConfig, LogFormat, LoggingConfig};

/// 双过程推理管线：发散与收敛两路并行，整合为单一结果
#[derive(Debug, Parser)]
#[command(name = "syna", version, about)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, default_value = "syna.yaml")]
    config: PathBuf,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,

    /// 待处理的输入 (省略时进入交互模式)
    input: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load(&cli.config)?;

    init_tracing(&config.logging);

    let dispatcher =
        Dispatcher::from_config(&config.syna()).context("Failed to build dispatcher")?;
    tracing::debug!(config = %cli.config.display(), "dispatcher ready");

    if !cli.input.is_empty() {
        let input = cli.input.join(" ");
        let outcome = dispatcher
            .process_with_profile(&input)
            .await
            .context("Processing failed")?;
        print_outcome(&outcome, cli.json)?;
        return Ok(());
    }

    repl(&dispatcher, &config, cli.json).await
}

fn init_tracing(logging: &LoggingConfig) {
    // 日志写到 stderr，stdout 留给结果输出
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("syna={0},syna_cognitive={0}", logging.level))
    });
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

async fn repl(dispatcher: &Dispatcher, config: &AppConfig, json: bool) -> anyhow::Result<()> {
    println!("Syna CLI v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for available commands, 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("syna> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        let (command, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));

        match command {
            "help" => {
                println!("Available commands:");
                println!("  help            - Show this help message");
                println!("  profile <text>  - Show the task profile and selected mode");
                println!("  config          - Show the active configuration");
                println!("  quit / exit     - Exit the CLI");
                println!("  <anything else> - Process the line as input");
            }
            "profile" => match dispatcher.selector().analyze_task(rest.trim()) {
                Ok(profile) => {
                    println!(
                        "complexity {:.2}, creativity {:.2}, analysis {:.2} -> {}",
                        profile.complexity(),
                        profile.creativity_required(),
                        profile.analysis_required(),
                        dispatcher.selector().select_mode(&profile)
                    );
                }
                Err(err) => println!("Error: {err}"),
            },
            "config" => {
                println!("{}", serde_json::to_string_pretty(config)?);
            }
            "quit" | "exit" => {
                println!("Goodbye!");
                break;
            }
            _ => match dispatcher.process_with_profile(input).await {
                Ok(outcome) => print_outcome(&outcome, json)?,
                Err(err) => println!("Error: {err}"),
            },
        }
    }

    Ok(())
}

fn print_outcome(outcome: &DispatchOutcome, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    let result = &outcome.result;
    println!(
        "mode: {} (complexity {:.2}, creativity {:.2}, analysis {:.2})",
        outcome.mode,
        outcome.profile.complexity(),
        outcome.profile.creativity_required(),
        outcome.profile.analysis_required()
    );
    println!(
        "confidence {:.2} | novelty {:.2} | cost {:.2}",
        result.confidence, result.novelty_score, result.resource_usage
    );
    println!("insights:");
    for (i, insight) in result.insights.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, insight);
    }
    println!("path: {}", result.processing_path.join(" -> "));
    Ok(())
}
