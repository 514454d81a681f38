//! `scribe generate`: build a request from flags or an interactive wizard,
//! run it, then print the text and its statistics.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use seoscribe_infra::filesystem::save_content;
use seoscribe_types::content::{
    Audience, ContentStats, GeneratedContent, GenerationRequest, Language, Length, Platform, Tone,
};

use crate::cli::GenerateArgs;
use crate::notice::{FailureNotice, Reported};
use crate::state::AppState;

/// Run one generation and report the outcome.
///
/// On failure the notice is printed to stderr and [`Reported`] is returned.
pub async fn generate(
    state: &AppState,
    args: GenerateArgs,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let output_dir = args.output_dir.clone().unwrap_or_else(|| state.output_dir());

    let (request, save) = if args.topic.is_some() {
        let save = args.save;
        (request_from_args(args), save)
    } else {
        wizard(&args)?
    };

    let spinner = (!json && !quiet).then(|| {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Generating {} content...", request.platform));
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        spinner
    });

    let result = state.generation_service.generate(&request).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let content = match result {
        Ok(content) => content,
        Err(err) => {
            FailureNotice::for_generation(&err).eprint();
            return Err(Reported.into());
        }
    };

    // The text is emitted before saving so a failed write never loses it.
    if json {
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else if quiet {
        println!("{}", content.text);
    } else {
        print_content(&content);
    }

    if save {
        if let Some(path) = save_or_warn(&output_dir, &content).await {
            if !json && !quiet {
                println!(
                    "  {} Saved to {}",
                    style("✓").green().bold(),
                    style(path.display()).cyan()
                );
                println!();
            }
        }
    }

    Ok(())
}

/// Save `content`, printing a warning to stderr instead of failing.
async fn save_or_warn(dir: &Path, content: &GeneratedContent) -> Option<PathBuf> {
    match save_content(dir, content).await {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), "failed to save content: {e}");
            eprintln!(
                "  {} Could not save {} in {}: {e}",
                style("!").yellow().bold(),
                content.file_name,
                dir.display()
            );
            None
        }
    }
}

/// Build a request from flags; unset selections take their defaults.
fn request_from_args(args: GenerateArgs) -> GenerationRequest {
    GenerationRequest {
        topic: args.topic.unwrap_or_default(),
        platform: args.platform.unwrap_or_default(),
        tone: args.tone.unwrap_or_default(),
        length: args.length.unwrap_or_default(),
        audience: args.audience.unwrap_or_default(),
        language: args.language.unwrap_or_default(),
        include_cta: args.cta,
        include_hashtags: args.hashtags,
        keywords: args.keywords.unwrap_or_default(),
    }
}

/// Ask for every field interactively. Flags that were given become the
/// preselected answers.
fn wizard(args: &GenerateArgs) -> anyhow::Result<(GenerationRequest, bool)> {
    // Prompts go to stderr (dialoguer's default); keep stdout for results.
    eprintln!();
    eprintln!("  {}", style("SEO content generator").bold());
    eprintln!();

    // Empty topics are let through so the service reports them.
    let topic: String = Input::new()
        .with_prompt("Topic")
        .allow_empty(true)
        .interact_text()?;

    let platform = select("Platform", &Platform::ALL, args.platform.unwrap_or_default())?;
    let tone = select("Tone", &Tone::ALL, args.tone.unwrap_or_default())?;
    let length = select("Length", &Length::ALL, args.length.unwrap_or_default())?;
    let audience = select(
        "Target audience",
        &Audience::ALL,
        args.audience.unwrap_or_default(),
    )?;
    let language = select("Language", &Language::ALL, args.language.unwrap_or_default())?;

    let include_cta = Confirm::new()
        .with_prompt("Include call to action?")
        .default(args.cta)
        .interact()?;
    let include_hashtags = Confirm::new()
        .with_prompt("Include hashtags?")
        .default(args.hashtags)
        .interact()?;

    let keywords: String = Input::new()
        .with_prompt("SEO keywords (optional)")
        .with_initial_text(args.keywords.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let save = Confirm::new()
        .with_prompt("Save to file?")
        .default(args.save)
        .interact()?;

    let request = GenerationRequest {
        topic,
        platform,
        tone,
        length,
        audience,
        language,
        include_cta,
        include_hashtags,
        keywords,
    };
    Ok((request, save))
}

fn select<T: Copy + PartialEq + Display>(
    prompt: &str,
    options: &[T],
    current: T,
) -> anyhow::Result<T> {
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let default = options.iter().position(|o| *o == current).unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(options[index])
}

fn print_content(content: &GeneratedContent) {
    println!();
    println!(
        "  {} Content generated for '{}'",
        style("✓").green().bold(),
        style(&content.topic).cyan()
    );
    println!();
    println!("{}", content.text);
    println!();
    println!("{}", stats_table(&content.stats));
    println!(
        "  {}",
        style(format!("model: {}", content.model)).dim()
    );
    println!();
}

fn stats_table(stats: &ContentStats) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Words").fg(Color::White),
        Cell::new("Characters").fg(Color::White),
        Cell::new("Lines").fg(Color::White),
    ]);
    table.add_row(vec![
        Cell::new(stats.words).fg(Color::Cyan),
        Cell::new(stats.characters).fg(Color::Cyan),
        Cell::new(stats.lines).fg(Color::Cyan),
    ]);
    table
}
