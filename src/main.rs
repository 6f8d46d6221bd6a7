use clap::{Arg, Command};
use locfile_mt::locfile::{TranslateOptions, translate_file};
use locfile_mt::mt::{GoogleTranslateProvider, MachineTranslator, MockMode, MockTranslator};
use std::env;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("locfile-mt")
        .version("0.1.0")
        .about("Translate quoted strings in localization files, preserving placeholders")
        .arg(
            Arg::new("file")
                .help("Localization file to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target-locale")
                .help("Target language code (e.g., zh-CN, fr, de)")
                .index(2)
                .default_value(TranslateOptions::DEFAULT_TARGET_LOCALE),
        )
        .arg(
            Arg::new("source-locale")
                .long("source")
                .short('s')
                .help("Source language code (default: en)")
                .default_value(TranslateOptions::DEFAULT_SOURCE_LOCALE),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Destination path (default: overwrite the source file)"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of Google Translate")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show run configuration and provider details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let file = matches.get_one::<String>("file").unwrap();
    let target_locale = matches.get_one::<String>("target-locale").unwrap();
    let source_locale = matches.get_one::<String>("source-locale").unwrap();
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    let mut options = TranslateOptions::new(Path::new(file), target_locale);
    options.with_source_locale(source_locale);
    if let Some(output) = matches.get_one::<String>("output") {
        options.with_destination(Path::new(output));
    }

    let provider: Box<dyn MachineTranslator> = if use_mock {
        Box::new(MockTranslator::new(MockMode::Suffix))
    } else {
        if env::var("GOOGLE_TRANSLATE_API_KEY").is_err() {
            eprintln!("❌ GOOGLE_TRANSLATE_API_KEY environment variable not set");
            eprintln!("   Set it with: export GOOGLE_TRANSLATE_API_KEY=your_api_key");
            eprintln!("   Or use --mock to use the mock translator");
            return Err("Missing API key".into());
        }
        Box::new(GoogleTranslateProvider::from_env()?)
    };

    if verbose {
        println!("📝 Source: {}", options.source.display());
        println!("🌍 {} → {}", options.source_locale, options.target_locale);
        println!("💾 Output: {}", options.output_path().display());
        println!("🔌 Provider: {}", provider.provider_name());
        println!();
    }

    let report = match translate_file(provider.as_ref(), &options).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ {}", e);
            return Err(e.into());
        }
    };

    for warning in &report.warnings {
        eprintln!("⚠️  {}", warning);
    }

    println!(
        "✅ Saved {} ({} lines, {} quoted values, {} fragments translated, {} kept original)",
        options.output_path().display(),
        report.lines,
        report.quoted_spans,
        report.fragments_translated,
        report.fragments_failed
    );

    Ok(())
}
