use crate::AuthSession;

use serde::{Deserialize, Serialize};

/// Signed-in user as exposed to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub user_id: String,
    pub display_name: Option<String>,
    pub profile_picture_url: Option<String>,
}

impl From<&AuthSession> for UserIdentity {
    fn from(session: &AuthSession) -> Self {
        Self {
            user_id: session.id.clone(),
            display_name: session.display_name.clone(),
            profile_picture_url: session.photo_url.clone(),
        }
    }
}
