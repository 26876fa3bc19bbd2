use serde::{Deserialize, Serialize};

/// Normalized public Instagram profile.
///
/// `profile_pic_url` is only set when the upstream payload carried signed
/// image metadata; it is serialized as `null` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub username: String,
    pub biography: String,
    pub is_private: bool,
    pub followers: u64,
    pub following: u64,
    pub jumlah_postingan: u64,
    pub profile_pic_url: Option<String>,
}
