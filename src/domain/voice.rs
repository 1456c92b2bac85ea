use serde::Serialize;

pub const DEFAULT_VOICE: &str = "en-US_AllisonV3Voice";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Voice {
    pub id: &'static str,
    pub name: &'static str,
    pub gender: &'static str,
    pub language: &'static str,
}

const VOICES: [Voice; 6] = [
    Voice {
        id: "en-US_AllisonV3Voice",
        name: "Allison",
        gender: "female",
        language: "English (US)",
    },
    Voice {
        id: "en-US_LisaV3Voice",
        name: "Lisa",
        gender: "female",
        language: "English (US)",
    },
    Voice {
        id: "en-US_MichaelV3Voice",
        name: "Michael",
        gender: "male",
        language: "English (US)",
    },
    Voice {
        id: "en-US_KevinV3Voice",
        name: "Kevin",
        gender: "male",
        language: "English (US)",
    },
    Voice {
        id: "en-GB_KateV3Voice",
        name: "Kate",
        gender: "female",
        language: "English (UK)",
    },
    Voice {
        id: "en-GB_JamesV3Voice",
        name: "James",
        gender: "male",
        language: "English (UK)",
    },
];

pub fn available_voices() -> &'static [Voice] {
    &VOICES
}

pub fn is_known_voice(id: &str) -> bool {
    VOICES.iter().any(|v| v.id == id)
}
