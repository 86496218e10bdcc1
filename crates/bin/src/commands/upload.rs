//! Upload boundary command.

use thoteca::Thoteca;
use thoteca::upload::{UploadClient, UploadRequest};

use crate::cli::UploadArgs;
use crate::commands::require_login;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn send(instance: &Thoteca, args: &UploadArgs) -> CommandResult {
    let user = require_login(instance)?;

    let client = UploadClient::new(&args.server);
    let request = UploadRequest {
        title: args.title.clone(),
        author: args.author.clone().unwrap_or(user.name),
        genre: args.genre.clone(),
        file: args.file.clone(),
    };

    let entry = instance.upload(&client, &request)?;
    println!("📤 Livro enviado! ({} — id {})", entry.title, entry.id);
    Ok(())
}
