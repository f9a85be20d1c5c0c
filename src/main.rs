use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use similar::{ChangeTag, TextDiff};

use glyphmark::{Config, DisplayTree, Html, MarkdownText, Pipeline};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(cli: &Cli, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (mut cfg, cfg_path) = glyphmark::config::load(cli.config.as_deref(), &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    if cli.no_emoji {
        cfg.emoji = false;
    }
    Ok(cfg)
}

fn print_diff(file_path: &str, original: &str, converted: &str) {
    let diff = TextDiff::from_lines(original, converted);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("---");
        }

        println!("Diff in {}:{}:", file_path, group[0].old_range().start + 1);

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", "\x1b[31m"), // red
                    ChangeTag::Insert => ("+", "\x1b[32m"), // green
                    ChangeTag::Equal => (" ", "\x1b[0m"),
                };

                print!("{}{}{}", style, sign, change.value());

                if change.tag() != ChangeTag::Equal {
                    print!("\x1b[0m");
                }
                if change.missing_newline() {
                    println!();
                }
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert { file, write, diff } => {
            let cfg = load_config(&cli, file)?;
            let input = read_all(file.as_ref())?;
            let output = Pipeline::new(cfg).run(Some(&input), &MarkdownText);

            if *diff {
                if input != output {
                    let file_name = file.as_ref().and_then(|p| p.to_str()).unwrap_or("<stdin>");
                    print_diff(file_name, &input, &output);
                    std::process::exit(1);
                }
                if file.is_some() {
                    println!("Nothing to convert");
                }
            } else if *write {
                let Some(file_path) = file else {
                    eprintln!("Error: --write requires an input file");
                    std::process::exit(2);
                };
                if input == output {
                    log::info!("{} unchanged", file_path.display());
                } else {
                    fs::write(file_path, &output)?;
                }
                println!("Converted {}", file_path.display());
            } else {
                print!("{output}");
            }

            Ok(())
        }
        Commands::Render { file } => {
            let cfg = load_config(&cli, file)?;
            let input = read_all(file.as_ref())?;
            print!("{}", Pipeline::new(cfg).run(Some(&input), &Html));
            Ok(())
        }
        Commands::Tree { file, json } => {
            let cfg = load_config(&cli, file)?;
            let input = read_all(file.as_ref())?;
            let pipeline = Pipeline::new(cfg);

            if *json {
                let tree = pipeline.run(Some(&input), &DisplayTree);
                let out = serde_json::to_string_pretty(&tree).map_err(io::Error::other)?;
                println!("{out}");
            } else {
                println!("{:#?}", pipeline.process(Some(&input)));
            }
            Ok(())
        }
        Commands::Emoji { query } => {
            let found = glyphmark::emoji::search(query);
            if found.is_empty() {
                eprintln!("No emoji matching '{query}'");
                std::process::exit(1);
            }
            for emoji in found {
                let codes: Vec<String> = emoji.shortcodes().map(|c| format!(":{c}:")).collect();
                println!("{}  {}  {}", emoji.as_str(), emoji.name(), codes.join(" "));
            }
            Ok(())
        }
    }
}
