//! CLI argument definitions for the Thoteca binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Theme choice mirrored onto the persisted preference.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

/// Thoteca local-first book writing and sharing tool
#[derive(Parser, Debug)]
#[command(name = "thoteca")]
#[command(about = "Thoteca: write, publish, and share books from your terminal")]
#[command(version)]
pub struct Cli {
    /// Data directory for the state file (thoteca.json)
    #[arg(short = 'D', long, env = "THOTECA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in (registers the username on first login)
    Login(LoginArgs),
    /// Log out of the current session
    Logout,
    /// Show the reader profile
    Profile,
    /// Work on the current book draft
    #[command(subcommand)]
    Book(BookCommands),
    /// List published and uploaded books
    Catalog,
    /// List the available genres
    Genres,
    /// Show or set the UI theme
    Theme(ThemeArgs),
    /// Send a book file through the upload server
    Upload(UploadArgs),
}

#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Username (3-20 letters, digits, or underscores)
    pub username: String,

    /// Password (at least 6 characters)
    #[arg(short, long)]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum BookCommands {
    /// Set the book title
    SetTitle { title: String },
    /// Set the book author
    SetAuthor { author: String },
    /// Set the book genre
    SetGenre { genre: String },
    /// List the chapters with content previews
    Chapters,
    /// Write and save a new chapter
    AddChapter(ChapterArgs),
    /// Rewrite an existing chapter
    EditChapter(EditChapterArgs),
    /// Delete a chapter
    DeleteChapter(DeleteChapterArgs),
    /// Confirm the draft is saved
    Save,
    /// Render the book as markup
    Preview,
    /// Export the book as a flat text file
    Export(ExportArgs),
    /// Publish the book to the catalog
    Publish,
}

#[derive(clap::Args, Debug)]
pub struct ChapterArgs {
    /// Chapter title (blank falls back to the chapter number)
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Chapter content
    #[arg(short, long)]
    pub content: String,
}

#[derive(clap::Args, Debug)]
pub struct EditChapterArgs {
    /// Zero-based chapter index
    pub index: usize,

    #[command(flatten)]
    pub chapter: ChapterArgs,
}

#[derive(clap::Args, Debug)]
pub struct DeleteChapterArgs {
    /// Zero-based chapter index
    pub index: usize,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Directory to write the exported file into
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ThemeArgs {
    /// Theme to persist; prints the current theme when omitted
    pub theme: Option<ThemeArg>,
}

#[derive(clap::Args, Debug)]
pub struct UploadArgs {
    /// File to send (PDF, JPEG, or PNG, up to 10 MiB)
    pub file: PathBuf,

    /// Book title
    #[arg(short, long)]
    pub title: String,

    /// Book author (defaults to the logged-in reader)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Book genre
    #[arg(short, long, default_value = "")]
    pub genre: String,

    /// Upload server base URL
    #[arg(long, default_value = "http://localhost:3001", env = "THOTECA_UPLOAD_URL")]
    pub server: String,
}
