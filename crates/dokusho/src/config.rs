use dokusho_lib::models::Lang;

/// Bump when the source id must change, every installed library entry is lost
pub const VERSION_ID: i64 = 1;

pub const BASE_NAME: &str = "Dokusho";

/// A locale flavour of the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub lang: &'static str,
    pub suffix: &'static str,
}

pub const VARIANTS: [Variant; 9] = [
    Variant { lang: "all", suffix: "" },
    Variant { lang: "en", suffix: "En" },
    Variant { lang: "ja", suffix: "Jp" },
    Variant { lang: "ja-ro", suffix: "JpRo" },
    Variant { lang: "fr", suffix: "Fr" },
    Variant { lang: "ko", suffix: "Ko" },
    Variant { lang: "ko-ro", suffix: "KoRo" },
    Variant { lang: "zh-hk", suffix: "ZhHk" },
    Variant { lang: "zh", suffix: "Zh" },
];

impl Variant {
    pub fn find(lang: &str) -> Option<Variant> {
        VARIANTS.iter().copied().find(|v| v.lang == lang)
    }

    pub fn is_all(&self) -> bool {
        self.lang == "all"
    }

    pub fn languages(&self) -> Lang {
        Lang::from_code(self.lang)
    }

    /// First 8 bytes of md5("dokusho/{lang}/{VERSION_ID}"), big endian, sign bit cleared
    pub fn source_id(&self) -> i64 {
        let key = format!("dokusho/{}/{}", self.lang, VERSION_ID);
        let digest = md5::compute(key.as_bytes());
        let mut bytes = [0_u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        i64::from_be_bytes(bytes) & i64::MAX
    }

    pub fn display_name(&self, user_suffix: &str) -> String {
        let mut name = BASE_NAME.to_string();
        let user_suffix = user_suffix.trim();
        if !user_suffix.is_empty() {
            name.push_str(&format!(" ({user_suffix})"));
        }
        if !self.suffix.is_empty() {
            name.push(' ');
            name.push_str(self.suffix);
        }
        name
    }
}
