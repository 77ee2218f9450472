//! Quick-start presets: named genre/theme bundles.
//!
//! A preset seeds the generate command with a genre selection and a theme;
//! explicit flags still win over the preset's values.

use crate::model::GenreTag;

/// One named preset.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub genres: &'static [GenreTag],
    pub theme: &'static str,
    pub description: &'static str,
}

/// All built-in presets.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "introspective",
        genres: &[GenreTag::Lofi, GenreTag::Ambient, GenreTag::NeoJazz],
        theme: "introspection",
        description: "Calm, contemplative album",
    },
    Preset {
        name: "energetic",
        genres: &[GenreTag::Trap, GenreTag::Electro, GenreTag::Techno],
        theme: "energy",
        description: "Dynamic, powerful album",
    },
    Preset {
        name: "nocturnal",
        genres: &[GenreTag::Ambient, GenreTag::Jazz, GenreTag::Rnb],
        theme: "night",
        description: "Late-evening atmosphere",
    },
    Preset {
        name: "urban",
        genres: &[GenreTag::Rap, GenreTag::Drill, GenreTag::Trap],
        theme: "city",
        description: "Street-leaning sound",
    },
    Preset {
        name: "experimental",
        genres: &[GenreTag::Techno, GenreTag::Ambient, GenreTag::NeoJazz],
        theme: "exploration",
        description: "Bold stylistic mix",
    },
];

/// Find a preset by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static Preset> {
    let wanted = name.trim().to_lowercase();
    PRESETS.iter().find(|p| p.name == wanted)
}
