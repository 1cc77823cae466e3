/// The user an accepted credential pair or session cookie belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
    pub role: String,
}
