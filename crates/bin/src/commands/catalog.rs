//! Catalog, genre, and theme commands.

use thoteca::catalog::EntryKind;
use thoteca::constants::GENRES;
use thoteca::{Theme, Thoteca};

use crate::cli::{ThemeArg, ThemeArgs};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn list(instance: &Thoteca) -> CommandResult {
    let entries = instance.catalog().all();
    if entries.is_empty() {
        println!("Nenhum livro publicado ainda.");
        return Ok(());
    }
    for entry in entries {
        let detail = match entry.kind {
            EntryKind::Escrito => format!("{} capítulo(s)", entry.chapters.unwrap_or(0)),
            EntryKind::Upload => format!("{} bytes", entry.size.unwrap_or(0)),
        };
        println!(
            "  [{}] {} — {} ({detail}, {})",
            entry.id,
            entry.title,
            entry.author,
            entry.uploaded_at,
        );
    }
    Ok(())
}

pub fn genres() -> CommandResult {
    println!("Gêneros Literários:");
    for genre in GENRES {
        println!("  {genre}");
    }
    Ok(())
}

pub fn theme(instance: &Thoteca, args: &ThemeArgs) -> CommandResult {
    match args.theme {
        Some(ThemeArg::Light) => instance.set_theme(Theme::Light),
        Some(ThemeArg::Dark) => instance.set_theme(Theme::Dark),
        None => {}
    }
    let current = match instance.theme() {
        Theme::Light => "☀️ light",
        Theme::Dark => "🌙 dark",
    };
    println!("Tema: {current}");
    Ok(())
}
