mod clipboard;
mod config;
mod constants;
mod render;

use crate::clipboard::default_clipboard;
use crate::config::GalleryCliConfig;
use crate::constants::GALLERY_CLI;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use gallery_core::gallery::{Gallery, GalleryError};
use gallery_core::prompt::{Category, PromptId};
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version,
display_name = "gallery",
bin_name = "gallery",
about="Browse, search and copy AI image-generation prompts",
long_about="Browse, search and copy AI image-generation prompts. \
 Copied prompts are counted and the most copied ones are shown as trending.", )]
struct Args {
    /// Path or URL of the prompt catalog
    #[arg(short = 'c', long, global = true)]
    catalog: Option<String>,

    /// Directory where trending counts are stored
    #[arg(short = 'p', long, global = true)]
    storage_path: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// List prompts, optionally filtered by category and search term
    List {
        #[arg(short = 'g', long, default_value = "All")]
        category: String,
        #[arg(short = 's', long, default_value = "")]
        search: String,
    },
    /// Show a single prompt
    Show {
        #[arg(short = 'i', long)]
        id: String,
    },
    /// Copy a prompt's text to the clipboard
    Copy {
        #[arg(short = 'i', long)]
        id: String,
    },
    /// Show the most copied prompts
    Trending {
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },
    /// List the category selectors
    Categories,
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Commands::Completions { shell } = &args.cmd {
        let mut cmd = Args::command();
        clap_complete::generate(*shell, &mut cmd, GALLERY_CLI, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match GalleryCliConfig::load() {
        Ok(config) => config.with_overrides(args.catalog.clone(), args.storage_path.clone()),
        Err(e) => {
            eprintln!("Error: Problem loading config: {}. Exiting...", e);
            return exit(exitcode::CONFIG);
        }
    };

    match run(&args.cmd, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(exit_code_for(&e))
        }
    }
}

async fn run(cmd: &Commands, config: &GalleryCliConfig) -> anyhow::Result<()> {
    let mut gallery = Gallery::open(&config.catalog_source(), config.storage()).await;
    let mut out = io::stdout().lock();

    match cmd {
        Commands::List { category, search } => {
            gallery.set_category(Category::from(category.as_str()));
            gallery.set_search_term(search.as_str());
            render::write_list(&mut out, &gallery.summary(), &gallery.visible())?;
        }
        Commands::Show { id } => {
            let id = PromptId::from(id.as_str());
            let prompt = gallery
                .catalog()
                .get(&id)
                .ok_or_else(|| GalleryError::PromptNotFound(id.clone()))?;
            render::write_prompt(&mut out, prompt, gallery.counts().get(&id))?;
        }
        Commands::Copy { id } => {
            let id = PromptId::from(id.as_str());
            let mut clipboard = default_clipboard();
            let count = gallery.copy(&id, &mut clipboard)?;
            render::write_copied(&mut out, &id, count)?;
        }
        Commands::Trending { top } => {
            let n = top.unwrap_or(config.trending_size);
            render::write_trending(&mut out, gallery.trending(n).as_deref())?;
        }
        Commands::Categories => {
            render::write_categories(&mut out)?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}

fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<GalleryError>() {
        Some(GalleryError::PromptNotFound(_)) => exitcode::DATAERR,
        Some(GalleryError::Clipboard(_)) => exitcode::UNAVAILABLE,
        None if err.downcast_ref::<io::Error>().is_some() => exitcode::IOERR,
        None => exitcode::SOFTWARE,
    }
}

fn exit(code: exitcode::ExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::clipboard::ClipboardError;

    #[test]
    fn test_args_parse_list() {
        let args = Args::try_parse_from(["gallery", "list", "-g", "Men", "-s", "sun"]).unwrap();
        match args.cmd {
            Commands::List { category, search } => {
                assert_eq!("Men", category);
                assert_eq!("sun", search);
            }
            other => panic!("Expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_args_list_defaults() {
        let args = Args::try_parse_from(["gallery", "list"]).unwrap();
        match args.cmd {
            Commands::List { category, search } => {
                assert_eq!("All", category);
                assert_eq!("", search);
            }
            other => panic!("Expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_args_global_options() {
        let args = Args::try_parse_from([
            "gallery",
            "copy",
            "--id",
            "3",
            "--catalog",
            "https://example.com/prompts.json",
            "-p",
            "/tmp/store",
        ])
        .unwrap();
        assert_eq!(Some("https://example.com/prompts.json".to_string()), args.catalog);
        assert_eq!(Some("/tmp/store".to_string()), args.storage_path);
    }

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_exit_codes() {
        let not_found = anyhow::Error::from(GalleryError::PromptNotFound(PromptId::from(1)));
        assert_eq!(exitcode::DATAERR, exit_code_for(&not_found));

        let clipboard = anyhow::Error::from(GalleryError::Clipboard(ClipboardError::unavailable(
            "test", "down",
        )));
        assert_eq!(exitcode::UNAVAILABLE, exit_code_for(&clipboard));

        let io_err = anyhow::Error::from(io::Error::other("broken pipe"));
        assert_eq!(exitcode::IOERR, exit_code_for(&io_err));
    }
}
