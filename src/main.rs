//! UnicornVision backend
//!
//! Run with: cargo run            (serves the API on port 3000)
//! Or:       cargo run -- sentiment <query> [--json]
//!           cargo run -- council

use anyhow::Result;
use unicorn_vision::{
    council::{CouncilEvent, CouncilRun, CouncilTiming},
    script::STARTUP_NAME,
    sentiment::SentimentGenerator,
    server,
    types::SentimentResult,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "sentiment" => {
                // sentiment <query...> [--json]
                let json_output = args.iter().any(|a| a == "--json");
                let query: String = args[2..]
                    .iter()
                    .filter(|a| !a.starts_with("--"))
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" ");
                return run_sentiment(&query, json_output);
            }
            "council" => {
                return run_council().await;
            }
            "--serve" => {
                let port: u16 = args
                    .iter()
                    .find(|a| a.starts_with("--port="))
                    .and_then(|a| a.strip_prefix("--port=").and_then(|p| p.parse().ok()))
                    .unwrap_or(server::DEFAULT_PORT);
                return server::serve(port).await;
            }
            other => {
                eprintln!("Unknown command: {other}");
                eprintln!("Usage: unicorn-vision [--serve [--port=N] | sentiment <query> [--json] | council]");
                std::process::exit(2);
            }
        }
    }

    server::serve(server::DEFAULT_PORT).await
}

/// One-shot sentiment generation, printed to the terminal
fn run_sentiment(query: &str, json_output: bool) -> Result<()> {
    let result = SentimentGenerator::from_entropy().generate(query);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_sentiment(query, &result);
    Ok(())
}

fn print_sentiment(query: &str, result: &SentimentResult) {
    println!("\nSENTIMENT ANALYSIS");
    println!("==================");
    println!("Query:   {}", if query.is_empty() { "(none)" } else { query });
    println!("Overall: {:+.1}", result.overall);

    println!("\nArticles:");
    for article in &result.articles {
        println!(
            "  [{:>8}] {} ({}, {:+.2})",
            article.sentiment.name(),
            article.title,
            article.source,
            article.score
        );
    }

    println!("\nKeywords:");
    for keyword in &result.keywords {
        let bar = "#".repeat((keyword.weight * 10.0) as usize);
        println!(
            "  {:<12} {:<8} [{:<10}] {:.2}",
            keyword.word,
            keyword.sentiment.name(),
            bar,
            keyword.weight
        );
    }
    println!();
}

/// Play the scripted council debate with the original pacing
async fn run_council() -> Result<()> {
    println!("\nAI INVESTMENT COUNCIL");
    println!("=====================");
    println!("Subject: {STARTUP_NAME}\n");

    let personas = unicorn_vision::script::council_personas();
    let (run, mut events) = CouncilRun::spawn(CouncilTiming::default());

    while let Some(event) = events.recv().await {
        match event {
            CouncilEvent::Thinking { agent } => {
                println!("  ... {} is analyzing", agent.name);
            }
            CouncilEvent::Message { message, consensus } => {
                let name = personas
                    .iter()
                    .find(|p| p.id == message.agent)
                    .map(|p| p.name.as_str())
                    .unwrap_or("Unknown");
                println!("\n[{}] {}", name.to_uppercase(), message.text);
                println!(
                    "    consensus: {} ({}%)",
                    consensus.rating.name(),
                    consensus.confidence
                );
            }
            CouncilEvent::Finished => break,
        }
    }

    let snapshot = run.snapshot();
    println!("\nFINAL CONFIDENCE");
    println!("----------------");
    for agent in &snapshot.agents {
        let bar = "#".repeat(agent.confidence as usize / 5);
        println!("  {:<10} [{:<20}] {}%", agent.id, bar, agent.confidence);
    }
    println!(
        "\nRecommendation: {} ({}% confidence)\n",
        snapshot.consensus.rating.name(),
        snapshot.consensus.confidence
    );

    run.finished().await;
    Ok(())
}
