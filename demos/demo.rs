//! Plays one round of every game mode against an in-memory corpus.
//!
//! Run with: `cargo run --example demo [corpus.json]`
//!
//! Without an argument a placeholder corpus of the 37 short chapters is built
//! in memory. With an argument, the file must hold a JSON array of
//! `Collection` values (as produced by `serde_json::to_string(&collections)`).
//!
//! Set `RUST_LOG=verse_quiz=debug` to see the engine's tracing output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use verse_quiz::{
    client_state, Collection, EngineConfig, GameMode, MemoryScoreStore, Passage, RoundStatus,
    SessionController, StaticCorpus,
};

const SHORT_CHAPTERS: [(u32, &str, u32); 37] = [
    (78, "An-Naba'", 40), (79, "An-Nazi'at", 46), (80, "'Abasa", 42),
    (81, "At-Takwir", 29), (82, "Al-Infitar", 19), (83, "Al-Mutaffifin", 36),
    (84, "Al-Insyiqaq", 25), (85, "Al-Buruj", 22), (86, "At-Tariq", 17),
    (87, "Al-A'la", 19), (88, "Al-Gasyiyah", 26), (89, "Al-Fajr", 30),
    (90, "Al-Balad", 20), (91, "Asy-Syams", 15), (92, "Al-Lail", 21),
    (93, "Ad-Duha", 11), (94, "Asy-Syarh", 8), (95, "At-Tin", 8),
    (96, "Al-'Alaq", 19), (97, "Al-Qadr", 5), (98, "Al-Bayyinah", 8),
    (99, "Az-Zalzalah", 8), (100, "Al-'Adiyat", 11), (101, "Al-Qari'ah", 11),
    (102, "At-Takasur", 8), (103, "Al-'Asr", 3), (104, "Al-Humazah", 9),
    (105, "Al-Fil", 5), (106, "Quraisy", 4), (107, "Al-Ma'un", 7),
    (108, "Al-Kausar", 3), (109, "Al-Kafirun", 6), (110, "An-Nasr", 3),
    (111, "Al-Lahab", 5), (112, "Al-Ikhlas", 4), (113, "Al-Falaq", 5),
    (114, "An-Nas", 6),
];

fn placeholder_corpus() -> StaticCorpus {
    StaticCorpus::new(SHORT_CHAPTERS.iter().map(|&(id, name, verses)| Collection {
        id,
        name: name.to_string(),
        passages: (1..=verses)
            .map(|n| Passage {
                number: n,
                collection_id: id,
                collection_name: name.to_string(),
                text: format!("[{name} {n}] source text"),
                translation: format!("[{name} {n}] translation"),
                audio_url: Some(format!("https://example.invalid/audio/05/{id:03}{n:03}.mp3")),
            })
            .collect(),
    }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let corpus = match std::env::args().nth(1) {
        Some(path) => StaticCorpus::from_json_file(path)?,
        None => placeholder_corpus(),
    };
    let engine = SessionController::new(corpus, MemoryScoreStore::new(), EngineConfig::with_seed(2024))?;

    // A player who gets roughly four out of five right.
    let mut player = StdRng::seed_from_u64(7);

    for mode in GameMode::ALL {
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  {}: {}", mode, mode.description());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        engine.start_round(mode).await?;

        while let Some(q) = engine.current_question() {
            println!("  Q{}: {}", q.id + 1, q.prompt);
            if let Some(hint) = &q.hint {
                println!("       ({hint})");
            }
            let choice = if player.gen_bool(0.8) {
                q.correct_index
            } else {
                player.gen_range(0..q.choices.len())
            };
            for (i, text) in q.choices.iter().enumerate() {
                let marker = if i == q.correct_index { "✓" } else { " " };
                let picked = if i == choice { ">" } else { " " };
                println!("    {picked}[{marker}] {text}");
            }

            if let Some(outcome) = engine.submit_answer(choice) {
                println!("    +{} points", outcome.awarded);
            }
            if engine.next_question() == Some(RoundStatus::Finished) {
                break;
            }
        }

        if let Some(summary) = engine.summary() {
            println!();
            println!(
                "  Score {}  ({}/{} correct, best streak {}, {} star(s), high score {})",
                summary.score, summary.correct, summary.total, summary.best_streak,
                summary.stars, summary.high_score
            );
        }
        println!();
    }

    println!("Final client view:");
    println!("{}", serde_json::to_string_pretty(&client_state(&engine.snapshot()))?);
    Ok(())
}
