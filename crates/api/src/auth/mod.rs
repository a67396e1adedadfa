//! Authentication building blocks: JWT tokens, password hashing, and the
//! startup seeding of the administrative user.

pub mod jwt;
pub mod password;

use printforge_db::models::user::CreateUser;
use printforge_db::repositories::UserRepo;
use printforge_db::DbPool;

use crate::config::ServerConfig;

/// Ensure the administrative user exists.
///
/// If no user with the configured `ADMIN_EMAIL` is present, one is created
/// with the hash of `ADMIN_PASSWORD`. Existing users are never modified, so
/// a changed env password does not rotate credentials on restart.
pub async fn seed_admin(pool: &DbPool, config: &ServerConfig) -> anyhow::Result<()> {
    if UserRepo::find_by_email(pool, &config.admin_email)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let password_hash = password::hash_password(&config.admin_password)
        .map_err(|e| anyhow::anyhow!("Failed to hash admin password: {e}"))?;

    UserRepo::create(
        pool,
        &CreateUser {
            email: config.admin_email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(email = %config.admin_email, "Seeded administrative user");
    Ok(())
}
