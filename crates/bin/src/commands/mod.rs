//! Command implementations for the Thoteca CLI.

pub mod auth;
pub mod book;
pub mod catalog;
pub mod upload;

use thoteca::Thoteca;
use thoteca::auth::SessionUser;

/// Commands behind the login gate fail early with a pointer to `login`.
pub fn require_login(instance: &Thoteca) -> Result<SessionUser, Box<dyn std::error::Error>> {
    let user = instance.current_user();
    if !user.logged {
        return Err("Acesso restrito: faça login primeiro (thoteca login <usuario> -p <senha>)".into());
    }
    Ok(user)
}
