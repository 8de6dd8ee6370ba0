//! Skill catalog CLI commands: list, show, create.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use skillhub_types::skill::Skill;

use crate::state::AppState;

/// List all skills in a table.
pub async fn list_skills(state: &AppState, json: bool) -> Result<()> {
    let skills = state.skill_service.list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&skills)?);
        return Ok(());
    }

    if skills.is_empty() {
        println!();
        println!(
            "  {} No skills found. Register one with: {}",
            style("i").blue().bold(),
            style("skillhub create skill.json").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Key").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Levels").fg(Color::White),
        Cell::new("Tags").fg(Color::White),
        Cell::new("Description").fg(Color::White),
    ]);

    for skill in &skills {
        table.add_row(vec![
            Cell::new(&skill.key).fg(Color::Cyan),
            Cell::new(&skill.name),
            Cell::new(skill.levels.len()),
            Cell::new(skill.tags.join(", ")).fg(Color::DarkGrey),
            Cell::new(truncate(&skill.description, 60)),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} skill{}",
        style(skills.len()).bold(),
        if skills.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show one skill with every level.
pub async fn show_skill(state: &AppState, key: &str, json: bool) -> Result<()> {
    let skill = state.skill_service.get_by_key(key).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&skill)?);
        return Ok(());
    }

    print_skill(&skill);
    Ok(())
}

/// Register a skill from a JSON document on disk (or stdin for `-`).
pub async fn create_skill(state: &AppState, file: &Path, json: bool) -> Result<()> {
    let raw = read_document(file).await?;
    let skill: Skill = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid skill document", file.display()))?;

    let created = state.skill_service.create(skill).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Skill '{}' registered with {} level{}",
        style("✓").green().bold(),
        style(&created.key).cyan(),
        created.levels.len(),
        if created.levels.len() == 1 { "" } else { "s" }
    );
    println!();
    Ok(())
}

async fn read_document(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let raw = tokio::task::spawn_blocking(|| {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map(|_| buf)
        })
        .await??;
        return Ok(raw);
    }

    tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))
}

fn print_skill(skill: &Skill) {
    println!();
    println!(
        "  {} {}",
        style(&skill.name).cyan().bold(),
        style(format!("({})", skill.key)).dim()
    );
    if !skill.description.is_empty() {
        println!("  {}", skill.description);
    }
    println!();
    if !skill.logo.is_empty() {
        println!("  {}  {}", style("Logo:").bold(), skill.logo);
    }
    if !skill.tags.is_empty() {
        println!("  {}  {}", style("Tags:").bold(), skill.tags.join(", "));
    }

    for level in &skill.levels {
        println!();
        println!(
            "  {} {} {}",
            style(format!("[{}]", level.level)).yellow(),
            style(&level.name).bold(),
            style(format!("({})", level.key)).dim()
        );
        if !level.brief.is_empty() {
            println!("      {}", level.brief);
        }
        for line in &level.descriptions {
            println!("      {} {}", style("•").dim(), line);
        }
    }
    println!();
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }
}
