use serde::Serialize;
use std::collections::BTreeMap;

pub struct PersonalityTrait {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub left_label: &'static str,
    pub right_label: &'static str,
}

pub struct LifestyleQuestion {
    pub id: &'static str,
    pub question: &'static str,
    /// (value, label)
    pub options: [(&'static str, &'static str); 4],
}

pub static PERSONALITY_TRAITS: [PersonalityTrait; 4] = [
    PersonalityTrait {
        id: "extroversion",
        name: "Extroversão",
        description: "Como você se relaciona com outras pessoas",
        icon: "👥",
        left_label: "Introvertido",
        right_label: "Extrovertido",
    },
    PersonalityTrait {
        id: "attention",
        name: "Atenção a Detalhes",
        description: "O quanto você nota pequenos detalhes",
        icon: "🎯",
        left_label: "Visão Geral",
        right_label: "Muito Detalhista",
    },
    PersonalityTrait {
        id: "planning",
        name: "Planejamento",
        description: "Como você organiza suas atividades",
        icon: "🕒",
        left_label: "Espontâneo",
        right_label: "Muito Planejado",
    },
    PersonalityTrait {
        id: "energy",
        name: "Nível de Energia",
        description: "Sua energia ao longo do dia",
        icon: "⚡",
        left_label: "Calmo/Relaxado",
        right_label: "Muito Energético",
    },
];

pub static LIFESTYLE_QUESTIONS: [LifestyleQuestion; 4] = [
    LifestyleQuestion {
        id: "workStyle",
        question: "Como você prefere trabalhar?",
        options: [
            ("office", "Escritório formal"),
            ("hybrid", "Híbrido (casa + escritório)"),
            ("remote", "Totalmente remoto"),
            ("creative", "Ambiente criativo/casual"),
        ],
    },
    LifestyleQuestion {
        id: "socialFrequency",
        question: "Com que frequência você sai para eventos sociais?",
        options: [
            ("rarely", "Raramente (1-2x por mês)"),
            ("sometimes", "Às vezes (1x por semana)"),
            ("often", "Frequentemente (2-3x por semana)"),
            ("daily", "Quase diariamente"),
        ],
    },
    LifestyleQuestion {
        id: "decisionMaking",
        question: "Como você toma decisões sobre roupas?",
        options: [
            ("quick", "Rápido e intuitivo"),
            ("research", "Pesquiso bastante antes"),
            ("advice", "Peço opinião de outros"),
            ("mood", "Baseado no meu humor"),
        ],
    },
    LifestyleQuestion {
        id: "priorities",
        question: "O que é mais importante para você ao se vestir?",
        options: [
            ("comfort", "Conforto acima de tudo"),
            ("style", "Estilo e aparência"),
            ("practicality", "Praticidade"),
            ("expression", "Expressão pessoal"),
        ],
    },
];

/// Submitted behavioral profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BehavioralProfile {
    pub personality: BTreeMap<String, u32>,
    pub lifestyle: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct BehavioralForm {
    scores: [u32; 4],
    answers: [Option<&'static str>; 4],
}

impl Default for BehavioralForm {
    fn default() -> Self {
        Self {
            scores: [50; 4],
            answers: [None; 4],
        }
    }
}

impl BehavioralForm {
    /// Slider value for the trait at `index` in [`PERSONALITY_TRAITS`].
    pub fn score_mut(&mut self, index: usize) -> Option<&mut u32> {
        self.scores.get_mut(index)
    }

    pub fn score(&self, index: usize) -> Option<u32> {
        self.scores.get(index).copied()
    }

    pub fn set_score(&mut self, index: usize, value: u32) {
        if let Some(score) = self.scores.get_mut(index) {
            *score = value.min(100);
        }
    }

    pub fn answer(&self, index: usize) -> Option<&'static str> {
        self.answers.get(index).copied().flatten()
    }

    /// Records an answer; values not offered by the question are ignored.
    pub fn set_answer(&mut self, index: usize, value: &str) -> bool {
        let Some(question) = LIFESTYLE_QUESTIONS.get(index) else {
            return false;
        };
        match question.options.iter().find(|(v, _)| *v == value) {
            Some((v, _)) => {
                self.answers[index] = Some(*v);
                true
            }
            None => false,
        }
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == LIFESTYLE_QUESTIONS.len()
    }

    pub fn submit(&self) -> Option<BehavioralProfile> {
        if !self.is_complete() {
            return None;
        }

        let personality = PERSONALITY_TRAITS
            .iter()
            .zip(self.scores)
            .map(|(t, score)| (t.id.to_string(), score))
            .collect();

        let lifestyle = LIFESTYLE_QUESTIONS
            .iter()
            .zip(self.answers)
            .filter_map(|(q, answer)| answer.map(|a| (q.id.to_string(), a.to_string())))
            .collect();

        Some(BehavioralProfile { personality, lifestyle })
    }
}
