//! Terminal rendering of the gallery's outputs.

use gallery_core::filter::FilterSummary;
use gallery_core::prompt::{Category, Prompt, PromptId};
use gallery_core::trending::TrendingEntry;
use std::io::{self, Write};

pub fn write_list<W: Write>(out: &mut W, summary: &FilterSummary, prompts: &[&Prompt]) -> io::Result<()> {
    writeln!(out, "{}", summary)?;

    if summary.is_empty() {
        writeln!(out)?;
        writeln!(out, "No prompts found")?;
        writeln!(out, "{}", summary.empty_message())?;
        return Ok(());
    }

    for prompt in prompts {
        writeln!(out)?;
        writeln!(out, "[{}] {} ({})", prompt.id, prompt.title, prompt.category)?;
        writeln!(out, "    {}", prompt.description)?;
        writeln!(out, "    > {}", prompt.prompt_text)?;
    }
    Ok(())
}

pub fn write_prompt<W: Write>(out: &mut W, prompt: &Prompt, copies: u64) -> io::Result<()> {
    writeln!(out, "{}", prompt.title)?;
    writeln!(out, "id:       {}", prompt.id)?;
    writeln!(out, "category: {}", prompt.category)?;
    writeln!(out, "image:    {}", prompt.image)?;
    writeln!(out, "copies:   {}", copies)?;
    writeln!(out)?;
    writeln!(out, "{}", prompt.description)?;
    writeln!(out)?;
    writeln!(out, "{}", prompt.prompt_text)
}

pub fn write_copied<W: Write>(out: &mut W, id: &PromptId, count: u64) -> io::Result<()> {
    writeln!(out, "Copied! Prompt {} ({} {})", id, count, plural(count))
}

/// Writes the trending section, or nothing when there is nothing to show.
pub fn write_trending<W: Write>(out: &mut W, entries: Option<&[TrendingEntry]>) -> io::Result<()> {
    let Some(entries) = entries else {
        log::info!("No trending prompts yet");
        return Ok(());
    };

    writeln!(out, "Trending Prompts")?;
    for entry in entries {
        writeln!(
            out,
            "#{} {} ({}) - {} {}",
            entry.rank,
            entry.prompt.title,
            entry.prompt.category,
            entry.count,
            plural(entry.count)
        )?;
    }
    Ok(())
}

pub fn write_categories<W: Write>(out: &mut W) -> io::Result<()> {
    for category in Category::ALL_SELECTORS.iter() {
        writeln!(out, "{}", category)?;
    }
    Ok(())
}

fn plural(count: u64) -> &'static str {
    if count == 1 { "copy" } else { "copies" }
}
