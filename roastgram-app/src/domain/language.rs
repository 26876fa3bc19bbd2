use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Indonesian,
    English,
    Mandarin,
    Japanese,
    Korean,
    Vietnamese,
    Filipino,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Indonesian,
        Language::English,
        Language::Mandarin,
        Language::Japanese,
        Language::Korean,
        Language::Vietnamese,
        Language::Filipino,
    ];

    /// Missing or unrecognized selectors fall back to Indonesian.
    pub fn from_selector(selector: Option<&str>) -> Self {
        selector
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indonesian => "indonesian",
            Self::English => "english",
            Self::Mandarin => "mandarin",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Vietnamese => "vietnamese",
            Self::Filipino => "filipino",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == wanted)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_selectors() {
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>(), Ok(lang));
        }
        assert_eq!(" English ".parse::<Language>(), Ok(Language::English));
    }

    #[test]
    fn test_fallback_to_indonesian() {
        assert_eq!(Language::from_selector(None), Language::Indonesian);
        assert_eq!(Language::from_selector(Some("klingon")), Language::Indonesian);
        assert_eq!(Language::from_selector(Some("")), Language::Indonesian);
        assert_eq!(Language::from_selector(Some("korean")), Language::Korean);
    }
}
