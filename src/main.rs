//! ChatDesk - FAQ chat assistant
//!
//! Answers one message with `--message`, otherwise chats on stdin.

use anyhow::Result;
use chatdesk::config::{config_path, Config};
use chatdesk::processor::ChatProcessor;
use chatdesk::session::{ChatSession, QUICK_REPLIES};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Answer a single message and exit
    #[arg(short, long)]
    message: Option<String>,

    /// Reply immediately instead of simulating typing
    #[arg(long)]
    no_delay: bool,

    /// Print the resolved intent before each reply
    #[arg(long)]
    intent: bool,

    /// Save the conversation log as JSON on exit
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Write the effective config (defaults filled in) and exit
    #[arg(long)]
    write_config: bool,
}

fn log_level(verbose: bool, configured: &str) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    configured.parse().unwrap_or(Level::INFO)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Logs go to stderr so replies on stdout stay clean
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(args.verbose, &config.log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("ChatDesk v{} starting...", env!("CARGO_PKG_VERSION"));

    if args.write_config {
        let path = args.config.clone().unwrap_or_else(config_path);
        config.save_to(&path)?;
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    let processor = Arc::new(ChatProcessor::new(&config));

    if let Some(message) = &args.message {
        let reply = processor.process(message);
        if args.intent {
            println!("[{}]", reply.intent);
        }
        println!("{}", reply.text);
        return Ok(());
    }

    let mut session = if args.no_delay {
        ChatSession::instant(processor.clone())
    } else {
        ChatSession::new(processor.clone(), config.typing_delay())
    };

    if let Some(greeting) = session.messages().first() {
        println!("{}\n", greeting.text);
    }
    let buttons: Vec<String> = QUICK_REPLIES
        .iter()
        .enumerate()
        .map(|(i, q)| format!("/quick {} = {}", i + 1, q.text))
        .collect();
    println!("Quick replies: {}  (/quit to exit)\n", buttons.join(", "));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "/quit" {
            break;
        }

        let message = match line.strip_prefix("/quick") {
            Some(n) => {
                let quick = n
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| QUICK_REPLIES.get(i));
                match quick {
                    Some(quick) => quick.text,
                    None => {
                        println!("Unknown quick reply '{}'\n", n.trim());
                        continue;
                    }
                }
            }
            None => line,
        };

        let Some(reply) = session.send(message).await.map(|m| m.text.clone()) else {
            continue;
        };
        if args.intent {
            println!("[{}]", processor.classify(message));
        }
        println!("{}\n", reply);
    }

    if let Some(path) = &args.transcript {
        session.save_transcript(path)?;
    }

    Ok(())
}
