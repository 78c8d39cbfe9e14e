use contracts::system::auth::{CurrentUserContext, UserInfoDto};
use web_sys::window;

/// Written by the login page with the user object of the login response
const USER_KEY: &str = "auth_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Signed-in user restored from localStorage
pub fn get_current_user() -> Option<CurrentUserContext> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    match serde_json::from_str::<UserInfoDto>(&raw) {
        Ok(dto) => Some(dto.into()),
        Err(e) => {
            log::warn!("Ignoring stored user: {}", e);
            None
        }
    }
}

