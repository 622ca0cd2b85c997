//! chatbot CLI: terminal chat with idle timers, and one-shot replies. Config from env and optional CLI args.

use std::sync::Arc;

use anyhow::{Context, Result};
use chat_session::{drive, ChatSession, SessionConfig, TokioClock};
use chatbot_cli::{load_config, render_event, render_suggestions, Cli, Commands};
use chatbot_core::{init_tracing, ConversationContext, Result as ChatResult};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use responder::Responder;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            seed,
            idle_secs,
            goodbye_secs,
        } => {
            let config = load_config(seed, idle_secs, goodbye_secs)?;
            init_tracing(Some(&config.log_file))?;
            handle_chat(config).await
        }
        Commands::Ask { utterance, seed } => {
            let config = load_config(seed, None, None)?;
            init_tracing(Some(&config.log_file))?;
            handle_ask(&utterance, config.rng_seed)
        }
    }
}

/// A session currently owned by its driver task.
struct Running {
    inbound: mpsc::Sender<String>,
    driver: JoinHandle<ChatResult<ChatSession>>,
    printer: JoinHandle<()>,
}

impl Running {
    /// Prints the latest bot message (the welcome) and hands the session to a driver task.
    fn start(session: ChatSession) -> Self {
        if let Some(last) = session.history().last() {
            println!("bot> {}", last.text.replace('\n', "\n     "));
            let chips = render_suggestions(&session.suggestions());
            if !chips.is_empty() {
                println!("{chips}");
            }
        }

        let (inbound, in_rx) = mpsc::channel(16);
        let (out_tx, mut out_rx) = mpsc::channel(16);
        let printer = tokio::spawn(async move {
            while let Some(event) = out_rx.recv().await {
                println!("{}", render_event(&event));
            }
        });
        let driver = tokio::spawn(drive(session, in_rx, out_tx));
        Self {
            inbound,
            driver,
            printer,
        }
    }

    /// Closes the inbound side and takes the session back from the driver.
    async fn stop(self) -> Result<ChatSession> {
        drop(self.inbound);
        let session = self.driver.await.context("session driver panicked")??;
        self.printer.await.context("printer task panicked")?;
        Ok(session)
    }
}

/// Handle the chat command.
///
/// Reads stdin line by line; `/reset` restarts the session, `/sair` (or EOF) quits.
async fn handle_chat(config: SessionConfig) -> Result<()> {
    let responder = Arc::new(Responder::default());
    let session = ChatSession::new(responder, config, Arc::new(TokioClock::new()));
    info!(session_id = %session.id(), "step: chat started");

    let mut running = Running::start(session);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            "/sair" | "/quit" => break,
            "/reset" => {
                let mut session = running.stop().await?;
                session.reset();
                running = Running::start(session);
            }
            text => {
                if running.inbound.send(text.to_string()).await.is_err() {
                    println!("(conversa encerrada: /reset para recomeçar, /sair para sair)");
                }
            }
        }
    }

    let session = running.stop().await?;
    info!(
        session_id = %session.id(),
        messages = session.history().len(),
        "step: chat finished"
    );
    Ok(())
}

/// Handle the ask command: one reply from a fresh context, then the context as JSON.
fn handle_ask(utterance: &str, seed: Option<u64>) -> Result<()> {
    let responder = Responder::default();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let reply = responder.respond(&ConversationContext::new(), &[], utterance, &mut rng);

    println!("{}", reply.text);
    println!();
    println!("rule: {}", reply.rule.unwrap_or("default"));
    println!(
        "{}",
        serde_json::to_string_pretty(&reply.context).context("Serialize conversation context")?
    );
    Ok(())
}
