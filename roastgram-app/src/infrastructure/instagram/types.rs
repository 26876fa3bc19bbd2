use crate::domain::{display_value, Profile};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct UserInfoResponse {
    #[serde(default)]
    pub result: Option<UserInfoResult>,
}

#[derive(Debug, Deserialize)]
pub struct UserInfoResult {
    #[serde(default)]
    pub user: Option<InstagramUser>,
}

#[derive(Debug, Deserialize)]
pub struct InstagramUser {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub biography: Option<String>,
    pub is_private: Option<bool>,
    pub follower_count: Option<u64>,
    pub following_count: Option<u64>,
    pub media_count: Option<u64>,
    pub hd_profile_pic_url_info: Option<HdProfilePicUrlInfo>,
}

#[derive(Debug, Deserialize)]
pub struct HdProfilePicUrlInfo {
    pub url: Option<String>,
    pub url_signature: Option<UrlSignature>,
}

/// Signature and expiry come back as strings or numbers depending on the
/// endpoint, so both are kept as raw JSON and printed verbatim.
#[derive(Debug, Deserialize)]
pub struct UrlSignature {
    #[serde(default)]
    pub signature: Value,
    #[serde(default)]
    pub expires: Value,
}

impl UserInfoResponse {
    pub fn into_user(self) -> Option<InstagramUser> {
        self.result?.user
    }
}

impl InstagramUser {
    /// `media_base` is the signed media endpoint, e.g. `https://media.gramsnap.com/get`.
    pub fn into_profile(self, media_base: &str) -> Profile {
        let profile_pic_url = self
            .hd_profile_pic_url_info
            .as_ref()
            .and_then(|info| signed_media_url(media_base, info));

        Profile {
            full_name: self.full_name.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            biography: self.biography.unwrap_or_default(),
            is_private: self.is_private.unwrap_or_default(),
            followers: self.follower_count.unwrap_or_default(),
            following: self.following_count.unwrap_or_default(),
            jumlah_postingan: self.media_count.unwrap_or_default(),
            profile_pic_url,
        }
    }
}

fn signed_media_url(media_base: &str, info: &HdProfilePicUrlInfo) -> Option<String> {
    let url = info.url.as_deref()?;
    let signature = info.url_signature.as_ref()?;
    if signature.signature.is_null() || signature.expires.is_null() {
        return None;
    }
    Some(format!(
        "{}?uri={}&__sig={}&__expires={}",
        media_base,
        encode_uri_component(url),
        display_value(&signature.signature),
        display_value(&signature.expires),
    ))
}

/// Percent-encodes like JavaScript's `encodeURIComponent`, which also leaves
/// `! ' ( ) *` untouched.
fn encode_uri_component(input: &str) -> String {
    urlencoding::encode(input)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MEDIA_BASE: &str = "https://media.gramsnap.com/get";

    fn user_payload(pic: Value) -> Value {
        json!({
            "result": {
                "user": {
                    "full_name": "Budi Santoso",
                    "username": "budi",
                    "biography": "ngopi terus",
                    "is_private": false,
                    "follower_count": 120,
                    "following_count": 900,
                    "media_count": 4,
                    "hd_profile_pic_url_info": pic
                }
            }
        })
    }

    fn parse(payload: Value) -> Option<InstagramUser> {
        serde_json::from_value::<UserInfoResponse>(payload)
            .unwrap()
            .into_user()
    }

    #[test]
    fn test_missing_user() {
        assert!(parse(json!({})).is_none());
        assert!(parse(json!({ "result": {} })).is_none());
        assert!(parse(json!({ "result": null })).is_none());
    }

    #[test]
    fn test_profile_fields_are_renamed() {
        let profile = parse(user_payload(Value::Null)).unwrap().into_profile(MEDIA_BASE);
        assert_eq!(profile.full_name, "Budi Santoso");
        assert_eq!(profile.username, "budi");
        assert_eq!(profile.followers, 120);
        assert_eq!(profile.following, 900);
        assert_eq!(profile.jumlah_postingan, 4);
        assert_eq!(profile.profile_pic_url, None);
    }

    #[test]
    fn test_signed_profile_pic_url() {
        let profile = parse(user_payload(json!({
            "url": "https://scontent.cdninstagram.com/v/t51/a b.jpg?stp=dst&_nc=1",
            "url_signature": { "signature": "AbC-123_x", "expires": 1722211200 }
        })))
        .unwrap()
        .into_profile(MEDIA_BASE);

        assert_eq!(
            profile.profile_pic_url.as_deref(),
            Some(
                "https://media.gramsnap.com/get?uri=https%3A%2F%2Fscontent.cdninstagram.com%2Fv%2Ft51%2Fa%20b.jpg%3Fstp%3Ddst%26_nc%3D1&__sig=AbC-123_x&__expires=1722211200"
            )
        );
    }

    #[test]
    fn test_serialized_profile_has_null_pic() {
        let profile = parse(user_payload(Value::Null)).unwrap().into_profile(MEDIA_BASE);
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["profile_pic_url"], Value::Null);
        assert_eq!(value["jumlah_postingan"], json!(4));
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b/c?d=(e)*!'~"), "a%20b%2Fc%3Fd%3D(e)*!'~");
    }
}
