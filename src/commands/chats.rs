use anyhow::Context;
use colored::Colorize;
use prettytable::{format, Table};
use std::path::Path;

use super::parse_chat_id;
use crate::error::Result;
use crate::storage::codec::{format_timestamp, from_json, to_pretty_json};
use crate::storage::{Chat, ChatStore};

/// Print every stored chat, newest first
pub async fn list_chats(store: &ChatStore, json: bool) -> Result<()> {
    let chats = store.list_all().await?;

    if json {
        print_json(&chats)?;
        return Ok(());
    }

    if chats.is_empty() {
        println!("{}", "No chats found.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

    table.add_row(prettytable::row![
        "ID".bold(),
        "Title".bold(),
        "Questions".bold(),
        "Timestamp".bold()
    ]);

    for chat in &chats {
        let id = chat.id.to_string();
        let id_short = &id[..8];
        let title = truncate(&chat.title, 40);
        let when = chat.timestamp.format("%Y-%m-%d %H:%M").to_string();

        table.add_row(prettytable::row![
            id_short.cyan(),
            title,
            chat.question_count(),
            when
        ]);
    }

    println!("\nStored chats ({}):", store.directory().display());
    table.printstd();
    println!();
    println!("Use {} to view a chat.", "chatshelf show <ID>".cyan());
    println!();

    Ok(())
}

/// Print one chat
pub async fn show_chat(store: &ChatStore, id: &str, json: bool) -> Result<()> {
    let id = parse_chat_id(id)?;
    let chat = store.get_by_id(id).await?;

    if json {
        return print_json(&chat);
    }

    println!("{}", chat.title.bold());
    println!("ID:        {}", chat.id.to_string().cyan());
    println!("Timestamp: {}", format_timestamp(&chat.timestamp));

    let questions = chat.questions.as_deref().unwrap_or_default();
    if questions.is_empty() {
        println!("\n{}", "No questions.".yellow());
    }
    for (index, question) in questions.iter().enumerate() {
        println!(
            "\n{} {}",
            format!("Q{}:", index + 1).green().bold(),
            question.question_text
        );
        match &question.answer_text {
            Some(answer) => println!("{} {}", "A:".blue().bold(), answer),
            None => println!("{}", "(no answer)".dimmed()),
        }
    }

    Ok(())
}

/// Read a chat from a JSON file and store it
pub async fn import_chat(store: &ChatStore, file: &Path) -> Result<Chat> {
    let bytes = std::fs::read(file)
        .with_context(|| format!("Failed to read chat file {}", file.display()))?;
    let chat: Chat = from_json(&bytes)
        .with_context(|| format!("Failed to parse chat file {}", file.display()))?;

    store.put(&chat).await?;
    tracing::info!("Imported chat: {} (ID: {})", chat.title, chat.id);
    println!("{}", format!("Imported chat {}", chat.id).green());

    Ok(chat)
}

/// Delete a chat by id; reports whether anything was removed
pub async fn delete_chat(store: &ChatStore, id: &str) -> Result<bool> {
    let id = parse_chat_id(id)?;
    let removed = store.delete_by_id(id).await?;

    if removed {
        println!("{}", format!("Deleted chat {}", id).green());
    } else {
        println!("{}", format!("No chat with ID {}", id).yellow());
    }

    Ok(removed)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let bytes = to_pretty_json(value)?;
    print!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
