use std::str::FromStr;

/// Closed set of speaker identifiers accepted by the synthesis provider.
///
/// The wire id (e.g. `en_us_001`) is what callers pass in the `voice` query
/// parameter and what gets forwarded upstream as `text_speaker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    // English
    EnglishAuFemale,
    EnglishAuMale,
    EnglishUkMale1,
    EnglishUkMale2,
    EnglishUsFemale1,
    EnglishUsFemale2,
    EnglishUsMale1,
    EnglishUsMale2,
    EnglishUsMale3,
    EnglishUsMale4,
    Narrator,
    Funny,
    Peaceful,
    Serious,
    // Disney
    GhostFace,
    Chewbacca,
    C3po,
    Stitch,
    Stormtrooper,
    Rocket,
    MadameLeota,
    GhostHost,
    Pirate,
    // French
    FrenchMale1,
    FrenchMale2,
    // Spanish
    SpanishSpainMale,
    SpanishMxMale,
    // Portuguese
    PortugueseBrFemale1,
    PortugueseBrFemale2,
    PortugueseBrFemale3,
    PortugueseBrMale,
    // German
    GermanFemale,
    GermanMale,
    // Indonesian
    IndonesianFemale,
    // Japanese
    JapaneseFemale1,
    JapaneseFemale2,
    JapaneseFemale3,
    JapaneseMale,
    // Korean
    KoreanMale1,
    KoreanFemale,
    KoreanMale2,
    // Singing
    Alto,
    Tenor,
    SunshineSoon,
    WarmyBreeze,
    Glorious,
    ItGoesUp,
    Chipmunk,
    Dramatic,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown voice id: {0}")]
pub struct UnknownVoice(pub String);

impl Voice {
    /// Every supported voice, in wire-id order per language group.
    pub const ALL: [Voice; 49] = [
        Voice::EnglishAuFemale,
        Voice::EnglishAuMale,
        Voice::EnglishUkMale1,
        Voice::EnglishUkMale2,
        Voice::EnglishUsFemale1,
        Voice::EnglishUsFemale2,
        Voice::EnglishUsMale1,
        Voice::EnglishUsMale2,
        Voice::EnglishUsMale3,
        Voice::EnglishUsMale4,
        Voice::Narrator,
        Voice::Funny,
        Voice::Peaceful,
        Voice::Serious,
        Voice::GhostFace,
        Voice::Chewbacca,
        Voice::C3po,
        Voice::Stitch,
        Voice::Stormtrooper,
        Voice::Rocket,
        Voice::MadameLeota,
        Voice::GhostHost,
        Voice::Pirate,
        Voice::FrenchMale1,
        Voice::FrenchMale2,
        Voice::SpanishSpainMale,
        Voice::SpanishMxMale,
        Voice::PortugueseBrFemale1,
        Voice::PortugueseBrFemale2,
        Voice::PortugueseBrFemale3,
        Voice::PortugueseBrMale,
        Voice::GermanFemale,
        Voice::GermanMale,
        Voice::IndonesianFemale,
        Voice::JapaneseFemale1,
        Voice::JapaneseFemale2,
        Voice::JapaneseFemale3,
        Voice::JapaneseMale,
        Voice::KoreanMale1,
        Voice::KoreanFemale,
        Voice::KoreanMale2,
        Voice::Alto,
        Voice::Tenor,
        Voice::SunshineSoon,
        Voice::WarmyBreeze,
        Voice::Glorious,
        Voice::ItGoesUp,
        Voice::Chipmunk,
        Voice::Dramatic,
    ];

    /// Get the provider wire id as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::EnglishAuFemale => "en_au_001",
            Voice::EnglishAuMale => "en_au_002",
            Voice::EnglishUkMale1 => "en_uk_001",
            Voice::EnglishUkMale2 => "en_uk_003",
            Voice::EnglishUsFemale1 => "en_us_001",
            Voice::EnglishUsFemale2 => "en_us_002",
            Voice::EnglishUsMale1 => "en_us_006",
            Voice::EnglishUsMale2 => "en_us_007",
            Voice::EnglishUsMale3 => "en_us_009",
            Voice::EnglishUsMale4 => "en_us_010",
            Voice::Narrator => "en_male_narration",
            Voice::Funny => "en_male_funny",
            Voice::Peaceful => "en_female_emotional",
            Voice::Serious => "en_male_cody",
            Voice::GhostFace => "en_us_ghostface",
            Voice::Chewbacca => "en_us_chewbacca",
            Voice::C3po => "en_us_c3po",
            Voice::Stitch => "en_us_stitch",
            Voice::Stormtrooper => "en_us_stormtrooper",
            Voice::Rocket => "en_us_rocket",
            Voice::MadameLeota => "en_female_madam_leota",
            Voice::GhostHost => "en_male_ghosthost",
            Voice::Pirate => "en_male_pirate",
            Voice::FrenchMale1 => "fr_001",
            Voice::FrenchMale2 => "fr_002",
            Voice::SpanishSpainMale => "es_002",
            Voice::SpanishMxMale => "es_mx_002",
            Voice::PortugueseBrFemale1 => "br_001",
            Voice::PortugueseBrFemale2 => "br_003",
            Voice::PortugueseBrFemale3 => "br_004",
            Voice::PortugueseBrMale => "br_005",
            Voice::GermanFemale => "de_001",
            Voice::GermanMale => "de_002",
            Voice::IndonesianFemale => "id_001",
            Voice::JapaneseFemale1 => "jp_001",
            Voice::JapaneseFemale2 => "jp_003",
            Voice::JapaneseFemale3 => "jp_005",
            Voice::JapaneseMale => "jp_006",
            Voice::KoreanMale1 => "kr_002",
            Voice::KoreanFemale => "kr_003",
            Voice::KoreanMale2 => "kr_004",
            Voice::Alto => "en_female_f08_salut_damour",
            Voice::Tenor => "en_male_m03_lobby",
            Voice::SunshineSoon => "en_male_m03_sunshine_soon",
            Voice::WarmyBreeze => "en_female_f08_warmy_breeze",
            Voice::Glorious => "en_female_ht_f08_glorious",
            Voice::ItGoesUp => "en_male_sing_funny_it_goes_up",
            Voice::Chipmunk => "en_male_m2_xhxs_m03_silly",
            Voice::Dramatic => "en_female_ht_f08_wonderful_world",
        }
    }

    /// Total validation from a raw wire id to a variant.
    pub fn from_id(id: &str) -> Option<Voice> {
        Voice::ALL.iter().copied().find(|v| v.as_str() == id)
    }
}

impl FromStr for Voice {
    type Err = UnknownVoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::from_id(s).ok_or_else(|| UnknownVoice(s.to_string()))
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
