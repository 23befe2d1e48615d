//! MagicTales CLI - story requests from the terminal
//!
//! Drives the MagicTales API tab by tab and checks Gemini keys locally.

mod api;
mod config;
mod key_check;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use std::fs;

use api::{Choice, MagicTalesClient, OptionCatalog, StoryForm, StoryResponse};
use config::Config;
use key_check::Diagnosis;

#[derive(Parser)]
#[command(name = "magictales")]
#[command(about = "MagicTales CLI - personalized stories with CEFR vocabulary", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or inspect the current session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Toggle premium mode
    Premium {
        #[command(subcommand)]
        action: PremiumAction,
    },

    /// Show the options the story request screen offers
    Options,

    /// Request a new story (prompts for anything not given)
    Story {
        /// Hero name
        #[arg(long)]
        hero: Option<String>,
        /// Pet name
        #[arg(long)]
        pet: Option<String>,
        /// City
        #[arg(long)]
        city: Option<String>,
        /// Favorite color
        #[arg(long)]
        color: Option<String>,
        /// CEFR level (A0, A1, A1+, A2, A2+, B1, B2)
        #[arg(short, long)]
        level: Option<String>,
        /// Length (3min, 5min, 8min, 12min)
        #[arg(long)]
        length: Option<String>,
        /// Style (warm, adventure, funny)
        #[arg(short, long)]
        style: Option<String>,
        /// Theme (e.g. first_day, animals, courage)
        #[arg(short, long)]
        theme: Option<String>,
        /// Superpower (none, invisibility, flight, fire_breath)
        #[arg(long)]
        superpower: Option<String>,
        /// Write the narration to this file
        #[arg(short, long)]
        audio: Option<String>,
    },

    /// Library operations
    Library {
        #[command(subcommand)]
        action: LibraryAction,
    },

    /// Show the home screen
    Home,

    /// Show this week's hot stories
    Hot,

    /// Show server diagnostics
    Tool,

    /// Check a Gemini API key directly against the provider
    CheckKey {
        /// API key (falls back to GEMINI_API_KEY, then a prompt)
        #[arg(short, long)]
        key: Option<String>,
        /// Model to test the key against
        #[arg(short, long, default_value = key_check::DEFAULT_MODEL)]
        model: String,
    },

    /// Point the CLI at another server
    SetUrl {
        /// Base URL (e.g. https://magictales.shuttle.app)
        url: String,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum SessionAction {
    /// Start a new session and make it current
    New,
    /// Show the current session
    Show,
}

#[derive(Subcommand)]
enum PremiumAction {
    /// Enable premium themes and superpowers
    On,
    /// Back to the free catalog
    Off,
}

#[derive(Subcommand)]
enum LibraryAction {
    /// Save the current story
    Save,
    /// List saved stories
    List {
        /// Case-insensitive filter
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Session { action } => cmd_session(action).await,
        Commands::Premium { action } => cmd_premium(action).await,
        Commands::Options => cmd_options().await,
        Commands::Story {
            hero,
            pet,
            city,
            color,
            level,
            length,
            style,
            theme,
            superpower,
            audio,
        } => {
            let form = StoryForm {
                hero_name: hero.unwrap_or_default(),
                pet_name: pet,
                city,
                favorite_color: color,
                level,
                length,
                style,
                theme,
                superpower,
            };
            cmd_story(form, audio).await
        }
        Commands::Library { action } => cmd_library(action).await,
        Commands::Home => cmd_home().await,
        Commands::Hot => cmd_hot().await,
        Commands::Tool => cmd_tool().await,
        Commands::CheckKey { key, model } => cmd_check_key(key, model).await,
        Commands::SetUrl { url } => cmd_set_url(url).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_session(action: SessionAction) -> Result<()> {
    let mut config = Config::load()?;
    let client = MagicTalesClient::new(&config.base_url);

    let session = match action {
        SessionAction::New => {
            let session = client.create_session().await?;
            config.session_id = Some(session.id);
            config.save()?;
            println!("{} New session {}", "✓".green(), session.id.to_string().cyan());
            session
        }
        SessionAction::Show => client.get_session(config.require_session()?).await?,
    };

    println!("{}", "Session:".bold());
    println!("  ID:          {}", session.id.to_string().dimmed());
    let premium = if session.premium {
        "on 💎".magenta().to_string()
    } else {
        "off".to_string()
    };
    println!("  Premium:     {}", premium);
    println!("  Coins:       {} 🪙", session.coins.to_string().yellow());
    println!("  Library:     {} stories", session.library_size);
    println!("  Story ready: {}", if session.has_story { "yes" } else { "no" });
    println!("  App ID:      {}", session.app_id);
    println!("  User ID:     {}", session.user_id);
    println!("  Storage:     {}", session.persistence);
    let generation = if session.generation_enabled {
        "enabled".green().to_string()
    } else {
        "disabled".red().to_string()
    };
    println!("  Generation:  {}", generation);

    if let Some(banner) = &session.banner {
        println!("\n{} {}", "⚠".yellow(), banner.yellow());
    }

    Ok(())
}

async fn cmd_premium(action: PremiumAction) -> Result<()> {
    let config = Config::load()?;
    let client = MagicTalesClient::new(&config.base_url);
    let enabled = matches!(action, PremiumAction::On);

    let session = client
        .set_premium(config.require_session()?, enabled)
        .await?;

    if session.premium {
        println!("{} Premium enabled 💎 - premium themes and superpowers unlocked", "✓".green());
    } else {
        println!("{} Premium disabled - free themes only", "✓".green());
    }

    Ok(())
}

async fn cmd_options() -> Result<()> {
    let config = Config::load()?;
    let client = MagicTalesClient::new(&config.base_url);
    let screen = client.request_screen(config.require_session()?).await?;
    let options = &screen.options;

    let mode = if screen.premium {
        "premium 💎".magenta().to_string()
    } else {
        "free".to_string()
    };
    println!("{} {}\n", "Catalog:".bold(), mode);

    println!("{}", "Levels:".bold());
    for level in &options.levels {
        println!("  {:<4} {} {}", level.level.cyan(), level.label, level.hint.dimmed());
    }

    println!("\n{}", "Lengths:".bold());
    for length in &options.lengths {
        println!(
            "  {:<6} {} (~{} words)",
            length.length.cyan(),
            length.label,
            length.word_count
        );
    }

    print_choices("Styles:", &options.styles);
    print_choices("Themes:", &options.themes);
    print_choices("Superpowers:", &options.superpowers);

    if options.superpower_locked {
        println!("\n{}", "Superpowers are premium only: magictales premium on".dimmed());
    }

    if let Some(story) = &screen.current_story {
        println!("\n{}", "Current story:".bold());
        print_story(story);
    }

    Ok(())
}

fn print_choices(heading: &str, choices: &[Choice]) {
    println!("\n{}", heading.bold());
    for choice in choices {
        println!("  {:<15} {}", choice.value.cyan(), choice.label);
    }
}

async fn cmd_story(mut form: StoryForm, audio: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let client = MagicTalesClient::new(&config.base_url);
    let session_id = config.require_session()?;

    if form.hero_name.trim().is_empty() {
        let screen = client.request_screen(session_id).await?;
        prompt_form(&mut form, &screen.options)?;
    }

    println!("{}", "✨ Writing your story...".dimmed());
    let story = client.generate_story(session_id, &form).await?;
    print_story(&story);

    for warning in &story.warnings {
        println!("{} {}", "⚠".yellow(), warning.yellow());
    }

    if let Some(path) = audio {
        if story.has_audio {
            let bytes = client.story_audio(session_id).await?;
            fs::write(&path, &bytes)
                .with_context(|| format!("Failed to write audio to {}", path))?;
            println!("{} Narration saved to {} ({} bytes)", "✓".green(), path, bytes.len());
        } else {
            println!("{}", "No narration available for this story.".yellow());
        }
    }

    println!("\n{}", "Save it with: magictales library save".dimmed());

    Ok(())
}

/// Interactive form, offering only what the catalog allows
fn prompt_form(form: &mut StoryForm, options: &OptionCatalog) -> Result<()> {
    form.hero_name = Input::new()
        .with_prompt("Hero name")
        .interact_text()
        .context("Failed to read hero name")?;

    form.pet_name = optional_input("Pet name")?;
    form.city = optional_input("City")?;
    form.favorite_color = optional_input("Favorite color")?;

    if form.level.is_none() {
        let labels: Vec<String> = options
            .levels
            .iter()
            .map(|l| format!("{} - {}", l.label, l.hint))
            .collect();
        let idx = select("Reading level", &labels)?;
        form.level = Some(options.levels[idx].level.clone());
    }

    if form.length.is_none() {
        let labels: Vec<String> = options.lengths.iter().map(|l| l.label.clone()).collect();
        let idx = select("Length", &labels)?;
        form.length = Some(options.lengths[idx].length.clone());
    }

    if form.style.is_none() {
        form.style = Some(select_choice("Style", &options.styles)?);
    }
    if form.theme.is_none() {
        form.theme = Some(select_choice("Theme", &options.themes)?);
    }
    if form.superpower.is_none() && !options.superpower_locked {
        form.superpower = Some(select_choice("Superpower", &options.superpowers)?);
    }

    Ok(())
}

fn optional_input(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read {}", prompt.to_lowercase()))?;
    Ok(Some(value).filter(|v| !v.trim().is_empty()))
}

fn select(prompt: &str, labels: &[String]) -> Result<usize> {
    if labels.is_empty() {
        bail!("No choices offered for {}", prompt);
    }
    Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact()
        .with_context(|| format!("Failed to read {}", prompt.to_lowercase()))
}

fn select_choice(prompt: &str, choices: &[Choice]) -> Result<String> {
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let idx = select(prompt, &labels)?;
    Ok(choices[idx].value.clone())
}

fn print_story(story: &StoryResponse) {
    println!("\n{}", story.title.bold());
    println!("{}\n", format!("Level {}", story.level).dimmed());
    println!("{}", story.text);

    if !story.vocab.is_empty() {
        println!("\n{}", "📚 Vocabulary:".bold());
        for word in &story.vocab {
            println!("  • {}", word.cyan());
        }
    }

    let audio = if story.has_audio {
        "🔊 narration ready".green().to_string()
    } else {
        "🔇 no narration".dimmed().to_string()
    };
    println!("\n{}", audio);
}

async fn cmd_library(action: LibraryAction) -> Result<()> {
    let config = Config::load()?;
    let client = MagicTalesClient::new(&config.base_url);
    let session_id = config.require_session()?;

    match action {
        LibraryAction::Save => {
            let saved = client.save_to_library(session_id).await?;
            if saved.added {
                println!("{} Saved '{}'", "✓".green(), saved.entry);
            } else {
                println!("{} '{}' is already in your library", "•".yellow(), saved.entry);
            }
            println!("{}", format!("{} stories in library", saved.library.total).dimmed());
        }

        LibraryAction::List { search } => {
            let library = client.list_library(session_id, search.as_deref()).await?;

            if let Some(message) = &library.empty_message {
                println!("{}", message);
                return Ok(());
            }

            println!("{}", "📚 My Library:".bold());
            if library.entries.is_empty() {
                println!("  {}", "No matches.".dimmed());
            }
            for entry in &library.entries {
                println!("  • {}", entry.cyan());
            }
            if search.is_some() {
                println!(
                    "{}",
                    format!("{} of {} stories", library.entries.len(), library.total).dimmed()
                );
            }
        }
    }

    Ok(())
}

async fn cmd_home() -> Result<()> {
    let config = Config::load()?;
    let client = MagicTalesClient::new(&config.base_url);
    let home = client.home_screen(config.require_session()?).await?;

    println!("{}", "🏠 Learning Progress".bold());
    for metric in &home.metrics {
        let delta = metric
            .delta
            .as_deref()
            .map(|d| format!(" ({})", d.green()))
            .unwrap_or_default();
        println!("  {:<28} {}{}", metric.label, metric.value.cyan(), delta);
    }

    let filled = (home.reward_progress.clamp(0.0, 1.0) * 20.0).round() as usize;
    println!(
        "\n  [{}{}] {}",
        "█".repeat(filled).yellow(),
        "░".repeat(20 - filled),
        home.reward_caption
    );

    if let Some(feature) = &home.premium_feature {
        println!("\n{} {}", "💎".magenta(), feature.title.magenta().bold());
        println!("  {}", feature.caption);
        println!("  {}", feature.image_url.dimmed());
    }

    println!("\n{}", "Classic stories:".bold());
    for title in &home.classic_stories {
        println!("  • {}", title);
    }

    Ok(())
}

async fn cmd_hot() -> Result<()> {
    let config = Config::load()?;
    let client = MagicTalesClient::new(&config.base_url);
    let hot = client.hot_screen(config.require_session()?).await?;

    println!("{}", hot.title.bold());
    for theme in &hot.themes {
        let marker = if hot.locked { "🔒" } else { "🔥" };
        println!("  {} {}", marker, theme);
    }
    if hot.locked {
        println!("\n{}", "Unlock with: magictales premium on".dimmed());
    }

    Ok(())
}

async fn cmd_tool() -> Result<()> {
    let config = Config::load()?;
    let client = MagicTalesClient::new(&config.base_url);
    let tool = client.tool_screen(config.require_session()?).await?;

    let on_off = |flag: bool| {
        if flag {
            "enabled".green().to_string()
        } else {
            "disabled".red().to_string()
        }
    };

    println!("{}", "🛠 Diagnostics".bold());
    println!("  App ID:          {}", tool.app_id);
    println!("  User ID:         {}", tool.user_id);
    println!("  Storage:         {}", tool.persistence);
    let db = match tool.database_reachable {
        Some(true) => "reachable".green().to_string(),
        Some(false) => "unreachable".red().to_string(),
        None => "not configured".dimmed().to_string(),
    };
    println!("  Database:        {}", db);
    println!(
        "  Generation:      {} {}",
        on_off(tool.generation_enabled),
        tool.text_model.as_deref().unwrap_or("-").dimmed()
    );
    println!(
        "  Narration:       {} {} {}",
        on_off(tool.narration_enabled),
        tool.speech_model.as_deref().unwrap_or("-").dimmed(),
        tool.voice.as_deref().unwrap_or("-").dimmed()
    );
    println!("  Active sessions: {}", tool.active_sessions);

    Ok(())
}

async fn cmd_check_key(key: Option<String>, model: String) -> Result<()> {
    let api_key = match key.or_else(|| std::env::var("GEMINI_API_KEY").ok()) {
        Some(k) if !k.trim().is_empty() => k.trim().to_string(),
        _ => Password::new()
            .with_prompt("Gemini API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    println!("{}", format!("--- Testing Gemini connection ({}) ---", model).dimmed());

    let diagnosis = key_check::check_key(key_check::BASE_URL, &api_key, &model).await;

    match &diagnosis {
        Diagnosis::Valid { reply } => {
            println!("{} Key is valid and the model answered.", "✓".green());
            println!("🤖 {}", reply);
        }
        Diagnosis::EmptyReply => {
            println!("{} Connected, but the model reply was empty.", "⚠".yellow());
        }
        Diagnosis::InvalidKey { status, message }
        | Diagnosis::ModelNotFound { status, message }
        | Diagnosis::BillingDisabled { status, message }
        | Diagnosis::Failed { status, message } => {
            println!("{} Request failed with HTTP {}", "✗".red(), status);
            println!("  Provider message: {}", message);
        }
        Diagnosis::Unreadable { status } => {
            println!("{} Request failed with HTTP {}", "✗".red(), status);
        }
        Diagnosis::Transport(e) => {
            println!("{} Network error or timeout: {}", "✗".red(), e);
        }
    }

    let conclusion = diagnosis.conclusion();
    if diagnosis.is_valid() {
        println!("→ {}", conclusion.green());
        Ok(())
    } else {
        println!("→ {}", conclusion.yellow());
        bail!("API key check failed")
    }
}

async fn cmd_set_url(url: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_base_url(&url);

    let client = MagicTalesClient::new(&config.base_url);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach MagicTales API at {}", config.base_url);
        }
    }

    // Sessions do not carry over between servers
    config.session_id = None;
    config.save()?;

    println!("{} Server set to {}", "✓".green(), config.base_url);
    println!("  Start a session with: magictales session new");

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Config file: {:?}", Config::config_path()?);
    println!("  Base URL:    {}", config.base_url);
    match config.session_id {
        Some(id) => println!("  Session:     {}", id.to_string().cyan()),
        None => println!("  Session:     {}", "(none)".dimmed()),
    }

    Ok(())
}
