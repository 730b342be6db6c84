//! History listing command.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use lexilevel_core::service::assessment::AssessmentService;
use lexilevel_infra::filesystem::resolve_data_dir;
use lexilevel_infra::sqlite::history::SqliteHistoryRepository;
use lexilevel_types::level::ProficiencyLevel;
use lexilevel_types::user::UserId;

use crate::state::open_database;

/// Longest text excerpt shown in the table.
const EXCERPT_CHARS: usize = 48;

/// Print a user's stored history, newest first.
pub async fn list_history(user_id: &str, json: bool) -> Result<()> {
    let pool = open_database(&resolve_data_dir()).await?;
    let service = AssessmentService::new(SqliteHistoryRepository::new(pool.clone()));
    let records = service.history(&UserId::new(user_id)).await?;
    pool.close().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!();
        println!("  {}", style(format!("No history for '{user_id}'.")).dim());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("When").fg(Color::White),
        Cell::new("Level").fg(Color::White),
        Cell::new("Hobbies").fg(Color::White),
        Cell::new("Text").fg(Color::White),
    ]);

    for record in &records {
        let level_cell = match record.level {
            ProficiencyLevel::Beginner => Cell::new("Beginner").fg(Color::Green),
            ProficiencyLevel::Intermediate => Cell::new("Intermediate").fg(Color::Yellow),
            ProficiencyLevel::Advanced => Cell::new("Advanced").fg(Color::Red),
            ProficiencyLevel::Unknown => Cell::new("Unknown").fg(Color::DarkGrey),
        };

        table.add_row(vec![
            Cell::new(record.timestamp.format("%Y-%m-%d %H:%M").to_string()),
            level_cell,
            Cell::new(record.hobbies.join(", ")),
            Cell::new(excerpt(&record.text)),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn excerpt(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(EXCERPT_CHARS - 1).collect();
        format!("{cut}…")
    }
}
