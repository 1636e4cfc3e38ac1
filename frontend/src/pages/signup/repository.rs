use crate::api::{ApiClient, ApiError, NewUser};

pub async fn register(api: &ApiClient, user: NewUser) -> Result<(), ApiError> {
    let created = api.register(&user).await?;
    match created {
        Some(profile) => log::info!("registered user {} ({})", profile.id, user.username),
        None => log::info!("registered user {}", user.username),
    }
    Ok(())
}
