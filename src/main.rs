use std::io::{self, BufRead};

use anyhow::{Result, bail};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;

use lexidr::challenge::{Attempt, ChallengeView, Mode, mask_string};
use lexidr::config::Config;
use lexidr::session::challenge::Outcome;
use lexidr::session::quiz::{AdvanceOutcome, QuizSession};
use lexidr::session::result::QuizSummary;
use lexidr::speech::{CommandSpeaker, NullSpeaker, Speaker};
use lexidr::vocab::VocabularyItem;
use lexidr::vocab::provider::{BundledProvider, VocabularyProvider};

#[derive(Parser)]
#[command(
    name = "lexidr",
    version,
    about = "Terminal vocabulary drill with adaptive hints"
)]
struct Cli {
    #[arg(short, long, help = "Practice mode (typed, choice, audio, reorder)")]
    mode: Option<String>,

    #[arg(short, long, help = "Number of words per session")]
    words: Option<usize>,

    #[arg(long, help = "Seed the rng for a reproducible session")]
    seed: Option<u64>,

    #[arg(long, help = "Use the bundled word list instead of the network")]
    offline: bool,

    #[arg(long, help = "Print the final summary as JSON")]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    config.normalize_mode();
    if let Some(words) = cli.words {
        config.word_count = words;
    }

    let mode_key = cli.mode.clone().unwrap_or_else(|| config.mode.clone());
    let Some(mode) = Mode::from_key(&mode_key) else {
        bail!("unknown mode '{mode_key}' (expected typed, choice, audio or reorder)");
    };

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let provider_rng = SmallRng::seed_from_u64(rng.r#gen());
    let items = fetch_items(&config, &cli, provider_rng)?;

    let mut speaker: Box<dyn Speaker> = if config.speech_enabled {
        Box::new(CommandSpeaker::new(&config.speech_command))
    } else {
        Box::new(NullSpeaker)
    };

    let mut quiz = QuizSession::new(items, mode, rng)?;
    run_quiz(&mut quiz, speaker.as_mut())?;
    print_summary(&quiz, cli.json)
}

fn fetch_items(config: &Config, cli: &Cli, rng: SmallRng) -> Result<Vec<VocabularyItem>> {
    let use_network = cfg!(feature = "network") && !cli.offline;
    #[cfg(feature = "network")]
    if use_network {
        use lexidr::vocab::provider::HttpProvider;
        let mut provider = HttpProvider::new(&config.provider_url);
        match provider.fetch(config.word_count) {
            Ok(items) => return Ok(items),
            Err(err) => eprintln!("{err}; falling back to the bundled word list"),
        }
    }
    let _ = use_network;
    let mut provider = BundledProvider::load(rng)?;
    Ok(provider.fetch(config.word_count)?)
}

fn run_quiz(quiz: &mut QuizSession, speaker: &mut dyn Speaker) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut spoken_for: Option<usize> = None;

    while let Some(session) = quiz.current() {
        let view = session.view();
        let index = quiz.index();
        print_view(&view, index, quiz.len());

        // Pronounce the word once per challenge, when it first appears.
        if spoken_for != Some(index) {
            if let Some(word) = session.challenge().spoken_word() {
                speaker.speak(word);
            }
            spoken_for = Some(index);
        }

        // EOF ends the session early; the summary still prints.
        let Some(line) = lines.next() else {
            break;
        };
        let input = line?.trim().to_string();
        if input.is_empty() {
            continue;
        }
        if input == ":quit" {
            break;
        }

        let attempt = attempt_from_input(&view, &input);
        match quiz.submit(&attempt)? {
            Outcome::Correct { credit, .. } => {
                println!("Correct! (+{credit})");
                finish_challenge(quiz)?;
            }
            Outcome::Retry { .. } => {
                println!("Incorrect! Try again.");
            }
            Outcome::Failed { answer } => {
                println!("Incorrect! The correct answer is \"{answer}\".");
                finish_challenge(quiz)?;
            }
        }
        println!();
    }
    Ok(())
}

fn attempt_from_input(view: &ChallengeView, input: &str) -> Attempt {
    match view {
        ChallengeView::Typed { .. } => Attempt::Typed(input.to_string()),
        ChallengeView::Choice { options, .. } => {
            // Accept an option label (a-d) or the literal option text.
            let upper = input.to_uppercase();
            let value = options
                .iter()
                .find(|o| upper == o.label.to_string())
                .map(|o| o.value.clone())
                .unwrap_or_else(|| input.to_string());
            Attempt::Choice(value)
        }
        ChallengeView::Reorder { .. } => {
            Attempt::Reorder(input.split_whitespace().map(str::to_string).collect())
        }
    }
}

fn print_view(view: &ChallengeView, index: usize, total: usize) {
    println!("[{}/{}]", index + 1, total);
    match view {
        ChallengeView::Typed {
            prompt,
            part_of_speech,
            mask,
            translation_hint,
            spoken_word,
            ..
        } => {
            match prompt {
                Some(translation) => {
                    println!("Translate the word: {translation} ({part_of_speech})");
                }
                None => println!("Type the word you hear."),
            }
            if spoken_word.is_some() {
                println!("(audio)");
            }
            if let Some(translation) = translation_hint {
                println!("Hint: it means \"{translation}\".");
            }
            println!("{}", mask_string(mask));
        }
        ChallengeView::Choice {
            prompt, options, ..
        } => {
            println!("{prompt}");
            for option in options {
                println!("  {}: {}", option.label, option.value);
            }
        }
        ChallengeView::Reorder { tokens, .. } => {
            println!("Arrange the words to form a correct sentence:");
            println!("  {}", tokens.join(" | "));
        }
    }
}

fn finish_challenge(quiz: &mut QuizSession) -> Result<()> {
    if let Some(session) = quiz.current() {
        if let Some(example) = &session.challenge().item.example {
            println!(
                "Example: {} - {}",
                example.source_text, example.translated_text
            );
        }
    }
    if quiz.advance()? == AdvanceOutcome::Completed {
        println!("You have completed all questions!");
    }
    Ok(())
}

fn print_summary(quiz: &QuizSession, json: bool) -> Result<()> {
    let summary = QuizSummary::from_session(quiz);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    if !summary.history.is_empty() {
        println!("History:");
        for (i, entry) in summary.history.iter().enumerate() {
            let marker = if entry.outcome.is_correct() { "+" } else { "-" };
            let missed = entry
                .user_attempt
                .as_deref()
                .map(|text| format!(" [you wrote: {text}]"))
                .unwrap_or_default();
            println!(
                "  {marker} {} - {} ({}/{}){missed}",
                entry.word,
                entry.translation,
                i + 1,
                summary.total
            );
        }
    }
    println!("Score: {}", summary.score);
    Ok(())
}
