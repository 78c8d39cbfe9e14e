use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleDto {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// User object as returned with the login response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoDto {
    pub id: i64,
    #[serde(default, alias = "name")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: RoleDto,
}

/// The signed-in user as seen by the dashboard pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUserContext {
    pub user_id: i64,
    pub full_name: String,
    pub role_slug: String,
}

impl CurrentUserContext {
    pub fn is_admin(&self) -> bool {
        self.role_slug.eq_ignore_ascii_case(ADMIN_ROLE)
    }
}

impl From<UserInfoDto> for CurrentUserContext {
    fn from(dto: UserInfoDto) -> Self {
        let full_name = dto
            .full_name
            .filter(|n| !n.trim().is_empty())
            .or(dto.email)
            .unwrap_or_default();
        Self {
            user_id: dto.id,
            full_name,
            role_slug: dto.role.slug.trim().to_lowercase(),
        }
    }
}
