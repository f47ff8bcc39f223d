// Companion CLI Entry Point
// Interactive terminal chat on top of the companion core

use anyhow::{Context, Result};
use companion_core::config::LogFormat;
use companion_core::models::{Sender, Turn};
use companion_core::{AppError, CompanionConfig, Conversation};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const HELP: &str = "Commands: /summary, /history, /help, /quit";

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn print_turn(turn: &Turn) {
    if let Some(alert) = &turn.crisis_alert {
        println!();
        println!("!!! {} !!!", alert.title.to_uppercase());
        println!("!!! {}", alert.description);
        println!();
    }
    if let Some(emotion) = turn.user_message.emotion {
        println!(
            "  [you: {} {:.0}%]",
            emotion,
            turn.user_message.emotion_score.unwrap_or(0.0) * 100.0
        );
    }
    println!("companion> {}", turn.reply.content);
}

fn print_summary(conversation: &Conversation) {
    let summary = conversation.mood_summary();
    println!("Messages: {}", summary.total_messages);
    for label in companion_core::EmotionLabel::ALL {
        println!(
            "  {:<9} {:>3} ({:.0}%)",
            label,
            summary.count(label),
            summary.share(label) * 100.0
        );
    }
    if let Some(mood) = summary.dominant_mood {
        println!("Dominant mood: {}", mood);
    }
    if let Some(average) = summary.average_score {
        println!("Average score: {:.2}", average);
    }
    if summary.crisis > 0 {
        println!("Crisis alerts: {}", summary.crisis);
    }
}

fn print_history(conversation: &Conversation) {
    for message in conversation.messages() {
        let who = match message.sender {
            Sender::User => "you",
            Sender::Companion => "companion",
        };
        println!(
            "[{}] {}> {}",
            message.timestamp.format("%H:%M:%S"),
            who,
            message.content
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let (config, env_file) = CompanionConfig::load().context("failed to load configuration")?;
    init_tracing(config.log_format);
    match env_file {
        Some(path) => info!("Loaded environment from {:?}", path),
        None => debug!("No .env file found"),
    }
    info!(?config, "Companion starting");

    let mut conversation = Conversation::new(&config);
    println!("companion> {}", conversation.messages()[0].content);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/help" => println!("{}", HELP),
            "/summary" => print_summary(&conversation),
            "/history" => print_history(&conversation),
            text => match conversation.submit(text) {
                Ok(turn) => {
                    if config.simulate_typing && !turn.typing_delay.is_zero() {
                        println!("companion is typing...");
                        tokio::time::sleep(turn.typing_delay).await;
                    }
                    print_turn(&turn);
                }
                Err(AppError::Validation(_)) => println!("Share your thoughts and feelings..."),
                Err(e) => {
                    error!("Failed to process message: {}", e);
                    return Err(e.into());
                }
            },
        }
    }

    info!(conversation_id = %conversation.id(), "Companion exiting");
    Ok(())
}
