//! src/profile/data.rs
//! The sealed inputs of one profile, as supplied by the storage layer.

/// Everything `unlock` needs from `profile.js`. Contains no plaintext secrets.
#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    /// Directory name of the profile inside the vault (`"default"` in practice).
    pub name: String,
    pub uuid: String,
    pub salt: Vec<u8>,
    pub iterations: u32,
    /// opdata01 blob; decrypts to the master key seed.
    pub master_key: Vec<u8>,
    /// opdata01 blob; decrypts to the overview key seed.
    pub overview_key: Vec<u8>,
    pub password_hint: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
