use super::progress::TickProgress;
use super::UserProfile;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct FacialFeature {
    pub id: &'static str,
    pub name: &'static str,
    pub value: &'static str,
    pub confidence: u8,
}

#[derive(Debug, Serialize)]
pub struct ColorRecommendation {
    pub category: &'static str,
    pub colors: [u32; 3],
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PersonalityInsight {
    #[serde(rename = "trait")]
    pub trait_name: &'static str,
    pub score: u8,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Look {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub items: [&'static str; 4],
    pub confidence: u8,
}

// Результаты заранее заготовлены, реального анализа фото нет
pub static FACIAL_FEATURES: [FacialFeature; 4] = [
    FacialFeature {
        id: "eyeShape",
        name: "Formato dos Olhos",
        value: "Amendoados",
        confidence: 92,
    },
    FacialFeature { id: "faceShape", name: "Formato do Rosto", value: "Oval", confidence: 88 },
    FacialFeature { id: "skinTone", name: "Tom de Pele", value: "Quente", confidence: 95 },
    FacialFeature { id: "eyeColor", name: "Cor dos Olhos", value: "Castanho", confidence: 90 },
];

pub static COLOR_RECOMMENDATIONS: [ColorRecommendation; 3] = [
    ColorRecommendation {
        category: "Cores Primárias",
        colors: [0x8B4513, 0xD2691E, 0xCD853F],
        description: "Tons terrosos que harmonizam com seu tom de pele",
    },
    ColorRecommendation {
        category: "Cores de Destaque",
        colors: [0xFF6B6B, 0x4ECDC4, 0x45B7D1],
        description: "Cores vibrantes para momentos especiais",
    },
    ColorRecommendation {
        category: "Neutros",
        colors: [0xF5F5DC, 0xDDBEA9, 0xCB997E],
        description: "Base neutra para combinar facilmente",
    },
];

pub static PERSONALITY_INSIGHTS: [PersonalityInsight; 3] = [
    PersonalityInsight {
        trait_name: "Extroversão",
        score: 75,
        description: "Você gosta de interação social e pode usar cores mais vibrantes",
    },
    PersonalityInsight {
        trait_name: "Criatividade",
        score: 65,
        description: "Está aberto a experimentar estilos únicos e inovadores",
    },
    PersonalityInsight {
        trait_name: "Elegância",
        score: 80,
        description: "Prefere looks sofisticados e bem coordenados",
    },
];

pub static LOOKS: [Look; 3] = [
    Look {
        id: "casual",
        name: "Look Casual Diário",
        description: "Perfeito para o dia a dia",
        items: ["Calça jeans escura", "Camisa bege", "Tênis branco", "Acessórios dourados"],
        confidence: 94,
    },
    Look {
        id: "work",
        name: "Look Profissional",
        description: "Ideal para ambiente de trabalho",
        items: ["Blazer marrom", "Calça social preta", "Camisa branca", "Sapato social"],
        confidence: 91,
    },
    Look {
        id: "party",
        name: "Look Festa",
        description: "Para ocasiões especiais",
        items: ["Vestido terra", "Salto nude", "Bolsa pequena", "Joias douradas"],
        confidence: 88,
    },
];

/// Checklist shown while the fake analysis runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    FeaturesDetected,
    SkinToneAnalysed,
    RecommendationsReady,
}

impl Milestone {
    pub const ALL: [Milestone; 3] = [
        Milestone::FeaturesDetected,
        Milestone::SkinToneAnalysed,
        Milestone::RecommendationsReady,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Milestone::FeaturesDetected => "Detectando características faciais",
            Milestone::SkinToneAnalysed => "Analisando tom de pele",
            Milestone::RecommendationsReady => "Gerando recomendações personalizadas",
        }
    }

    /// Reached once progress is strictly above this percentage.
    pub fn threshold(self) -> u8 {
        match self {
            Milestone::FeaturesDetected => 20,
            Milestone::SkinToneAnalysed => 50,
            Milestone::RecommendationsReady => 80,
        }
    }

    pub fn reached(self, percent: u8) -> bool {
        percent > self.threshold()
    }
}

/// The simulated analysis shown when the results step opens.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRun {
    progress: TickProgress,
}

impl AnalysisRun {
    pub fn start(tick: Duration) -> Self {
        log::info!("🔍 Анализ запущен");
        Self {
            progress: TickProgress::start(tick),
        }
    }

    pub fn percent(&self) -> u8 {
        self.progress.percent()
    }

    pub fn is_done(&self) -> bool {
        self.progress.is_done()
    }
}

/// Everything the results step shows, plus what the user submitted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport<'a> {
    pub generated_at: DateTime<Local>,
    pub profile: &'a UserProfile,
    pub facial_features: &'static [FacialFeature],
    pub color_recommendations: &'static [ColorRecommendation],
    pub personality_insights: &'static [PersonalityInsight],
    pub looks: &'static [Look],
}

impl<'a> AnalysisReport<'a> {
    pub fn new(profile: &'a UserProfile) -> Self {
        Self {
            generated_at: Local::now(),
            profile,
            facial_features: &FACIAL_FEATURES,
            color_recommendations: &COLOR_RECOMMENDATIONS,
            personality_insights: &PERSONALITY_INSIGHTS,
            looks: &LOOKS,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
