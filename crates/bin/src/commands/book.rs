//! Editor commands for the current book draft.

use std::fs;
use std::io::{self, Write};

use thoteca::Thoteca;
use thoteca::editor::DraftEditor;

use crate::cli::{BookCommands, ChapterArgs, DeleteChapterArgs, EditChapterArgs, ExportArgs};
use crate::commands::require_login;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn run(instance: &Thoteca, command: BookCommands) -> CommandResult {
    require_login(instance)?;
    let mut editor = instance.editor();

    match command {
        BookCommands::SetTitle { title } => {
            editor.set_title(&title);
            println!("Título atualizado.");
        }
        BookCommands::SetAuthor { author } => {
            editor.set_author(&author);
            println!("Autor atualizado.");
        }
        BookCommands::SetGenre { genre } => {
            editor.set_genre(&genre);
            println!("Gênero atualizado.");
        }
        BookCommands::Chapters => chapters(&editor),
        BookCommands::AddChapter(args) => add_chapter(&mut editor, &args)?,
        BookCommands::EditChapter(args) => edit_chapter(&mut editor, &args)?,
        BookCommands::DeleteChapter(args) => delete_chapter(&mut editor, &args)?,
        BookCommands::Save => {
            editor.save_draft()?;
            println!("💾 Rascunho salvo automaticamente.");
        }
        BookCommands::Preview => {
            println!("{}", editor.preview()?);
        }
        BookCommands::Export(args) => export(&editor, &args)?,
        BookCommands::Publish => {
            let entry = editor.publish(&instance.catalog())?;
            println!("🎉 Livro publicado com sucesso na Thoteca! (id {})", entry.id);
        }
    }
    Ok(())
}

fn chapters(editor: &DraftEditor) {
    let draft = editor.draft();
    println!(
        "{} — {} capítulo(s), {} palavra(s)",
        if draft.title.is_empty() { "(sem título)" } else { &draft.title },
        draft.chapters.len(),
        draft.word_count(),
    );
    if draft.chapters.is_empty() {
        println!("Nenhum capítulo criado ainda.");
        return;
    }
    for (index, chapter) in draft.chapters.iter().enumerate() {
        println!("  [{index}] {}", chapter.title);
        println!("      {}", chapter.snippet());
    }
}

fn add_chapter(editor: &mut DraftEditor, args: &ChapterArgs) -> CommandResult {
    editor.add_chapter();
    let chapter = editor.save_chapter(&args.title, &args.content)?;
    println!("✅ Capítulo salvo com sucesso! ({})", chapter.title);
    Ok(())
}

fn edit_chapter(editor: &mut DraftEditor, args: &EditChapterArgs) -> CommandResult {
    editor.open_chapter(args.index)?;
    let chapter = editor.save_chapter(&args.chapter.title, &args.chapter.content)?;
    println!("✅ Capítulo salvo com sucesso! ({})", chapter.title);
    Ok(())
}

fn delete_chapter(editor: &mut DraftEditor, args: &DeleteChapterArgs) -> CommandResult {
    if !args.yes && !confirm("Tem certeza que deseja deletar este capítulo?")? {
        println!("Cancelado.");
        return Ok(());
    }
    let removed = editor.delete_chapter(args.index)?;
    println!("🗑️ Capítulo removido: {}", removed.title);
    Ok(())
}

fn export(editor: &DraftEditor, args: &ExportArgs) -> CommandResult {
    let export = editor.export()?;
    let path = args.out.join(&export.filename);
    fs::write(&path, &export.content)?;
    println!("📄 Exportado para {}", path.display());
    Ok(())
}

/// External yes/no gate for destructive operations.
fn confirm(prompt: &str) -> Result<bool, io::Error> {
    print!("{prompt} [s/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "s" || answer == "sim" || answer == "y")
}
