//! Login, logout, and profile commands.

use thoteca::Thoteca;

use crate::cli::LoginArgs;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn login(instance: &Thoteca, args: &LoginArgs) -> CommandResult {
    let session = instance.login(&args.username, &args.password)?;
    println!("✅ Login efetuado com sucesso! Bem-vindo, {}.", session.name);
    Ok(())
}

pub fn logout(instance: &Thoteca) -> CommandResult {
    instance.logout();
    println!("👋 Você foi desconectado.");
    Ok(())
}

pub fn profile(instance: &Thoteca) -> CommandResult {
    let user = instance.current_user();
    let books = instance.catalog().count();

    println!("Perfil de Leitor");
    println!("  Nome: {}", user.name);
    println!(
        "  Status: {}",
        if user.logged { "✅ Logado" } else { "❌ Não logado" }
    );
    println!("  Livros enviados: {books}");
    println!(
        "  Leitor desde: {}",
        user.joined.as_deref().unwrap_or("N/A")
    );
    Ok(())
}
