//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::core::models::SourceLanguage;

/// Commands for the dictionary translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate all values of a JSON dictionary file
    Translate {
        /// Input JSON file (required)
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file, or an existing directory when more than one
        /// target language is given (files are named <lang>.json)
        #[arg(short, long)]
        output: PathBuf,

        /// Source language tag, or "auto" / "." to detect automatically
        #[arg(short, long, default_value = "auto")]
        source_lang: String,

        /// Target language tag(s), comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        target_langs: Vec<String>,
    },

    /// List language tags supported by the translation provider
    Languages,
}

/// Resolve the output file for one target language
fn output_file_for(output: &Path, lang: &str) -> PathBuf {
    if output.is_dir() {
        output.join(format!("{}.json", lang))
    } else {
        output.to_path_buf()
    }
}

/// Normalize the CLI source language argument ("." is an alias for auto)
fn parse_source_lang(arg: &str) -> SourceLanguage {
    if arg == "." {
        SourceLanguage::Auto
    } else {
        arg.parse().unwrap_or(SourceLanguage::Auto)
    }
}

/// Handle the translate command
pub async fn handle_translate(
    input: PathBuf,
    output: PathBuf,
    source_lang: String,
    target_langs: Vec<String>,
) -> anyhow::Result<()> {
    use crate::core::client::TranslationClient;
    use crate::core::dictionary::Dictionary;
    use crate::core::engine::DictionaryTranslator;
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;
    use tracing::{info, warn};

    if !input.is_file() {
        anyhow::bail!("File '{}' not found", input.display());
    }

    let target_langs: Vec<String> = target_langs
        .into_iter()
        .filter(|lang| !lang.trim().is_empty())
        .collect();

    if target_langs.is_empty() {
        anyhow::bail!("At least one target language must be specified");
    }

    if target_langs.len() > 1 && !output.is_dir() {
        anyhow::bail!("Output directory not found: '{}'", output.display());
    }

    let source = parse_source_lang(&source_lang);

    info!("Starting dictionary translation");
    info!("Input: {}", input.display());
    info!("Output: {}", output.display());
    info!("Source language: {}", source);
    info!("Target languages: {}", target_langs.join(", "));

    let dict = Dictionary::load(&input)?;
    info!("Loaded {} entries from {}", dict.len(), input.display());

    let client = TranslationClient::from_env()?;
    let translator = DictionaryTranslator::new(client);

    // Progress over target languages; each language is one engine invocation
    let pb = ProgressBar::new(target_langs.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        .unwrap()
        .progress_chars("=>-"));

    let mut total_failed = 0;

    for lang in &target_langs {
        pb.set_message(format!("Translating to {}", lang));

        let output_file = output_file_for(&output, lang);
        let start_time = Instant::now();

        let translated = translator.translate_dictionary(&dict, &source, lang).await;

        let elapsed = start_time.elapsed().as_secs_f64();
        info!(
            "Translated to {} in {:.3}s. Saving translation to {}",
            lang,
            elapsed,
            output_file.display()
        );

        if !translated.failures.is_empty() {
            warn!(
                "{} of {} entries failed to translate to {}",
                translated.failures.len(),
                translated.len(),
                lang
            );
            total_failed += translated.failures.len();
        }

        translated.save(&output_file)?;
        pb.inc(1);
    }

    pb.finish_with_message("Completed");

    println!("\n✅ Translation completed!");
    println!("   Languages: {}", target_langs.len());
    println!("   Entries per language: {}", dict.len());
    println!("   Failed entries: {}", total_failed);

    Ok(())
}

/// Handle the languages command
pub async fn handle_languages() -> anyhow::Result<()> {
    use crate::core::client::TranslationClient;

    let client = TranslationClient::from_env()?;
    let languages = client.supported_languages().await?;

    println!("Supported languages:");
    for info in &languages {
        match &info.name {
            Some(name) => println!("    {:<15} {}", info.language, name),
            None => println!("    {}", info.language),
        }
    }

    Ok(())
}
