use fbgate_auth::FacebookUser;

pub async fn handler(FacebookUser(user_id): FacebookUser) -> String {
    format!("Hello, Facebook user {user_id}")
}
