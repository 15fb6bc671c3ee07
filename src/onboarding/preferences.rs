use serde::Serialize;
use std::ops::RangeInclusive;

pub const MAX_STYLES: usize = 3;

pub const BUDGET_RANGE: RangeInclusive<u32> = 100..=2000;
pub const BUDGET_STEP: u32 = 50;
pub const ADVENTURE_RANGE: RangeInclusive<u32> = 0..=100;
pub const ADVENTURE_STEP: u32 = 10;

pub struct Palette {
    pub id: &'static str,
    pub name: &'static str,
    /// Swatches as 0xRRGGBB
    pub colors: [u32; 3],
    pub description: &'static str,
}

pub struct StyleOption {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub struct Occasion {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub static PALETTES: [Palette; 6] = [
    Palette {
        id: "warm",
        name: "Tons Quentes",
        colors: [0xFF6B6B, 0xFF8E53, 0xFF6B9D],
        description: "Cores vibrantes e acolhedoras",
    },
    Palette {
        id: "cool",
        name: "Tons Frios",
        colors: [0x4ECDC4, 0x45B7D1, 0x96CEB4],
        description: "Cores calmas e refrescantes",
    },
    Palette {
        id: "neutral",
        name: "Neutros",
        colors: [0x95A5A6, 0xBDC3C7, 0xE8E8E8],
        description: "Cores equilibradas e versáteis",
    },
    Palette {
        id: "bold",
        name: "Cores Vibrantes",
        colors: [0x9B59B6, 0xE74C3C, 0xF39C12],
        description: "Cores marcantes e energéticas",
    },
    Palette {
        id: "pastel",
        name: "Tons Pastéis",
        colors: [0xFFB6C1, 0xDDA0DD, 0x98FB98],
        description: "Cores suaves e delicadas",
    },
    Palette {
        id: "earth",
        name: "Tons Terrosos",
        colors: [0xD2691E, 0x8B4513, 0xA0522D],
        description: "Cores naturais e orgânicas",
    },
];

pub static STYLES: [StyleOption; 6] = [
    StyleOption { id: "classic", name: "Clássico", icon: "👔", description: "Elegante e atemporal" },
    StyleOption {
        id: "modern",
        name: "Moderno",
        icon: "✨",
        description: "Contemporâneo e minimalista",
    },
    StyleOption { id: "bohemian", name: "Boêmio", icon: "🌸", description: "Livre e artístico" },
    StyleOption { id: "edgy", name: "Arrojado", icon: "⚡", description: "Ousado e diferente" },
    StyleOption { id: "romantic", name: "Romântico", icon: "💕", description: "Suave e feminino" },
    StyleOption {
        id: "sporty",
        name: "Esportivo",
        icon: "👟",
        description: "Confortável e prático",
    },
];

pub static OCCASIONS: [Occasion; 6] = [
    Occasion { id: "work", name: "Trabalho", icon: "💼" },
    Occasion { id: "casual", name: "Casual", icon: "👕" },
    Occasion { id: "formal", name: "Formal", icon: "👔" },
    Occasion { id: "party", name: "Festa", icon: "🎉" },
    Occasion { id: "date", name: "Encontro", icon: "💕" },
    Occasion { id: "travel", name: "Viagem", icon: "✈" },
];

/// Submitted aesthetic preferences.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub color_palette: String,
    pub styles: Vec<String>,
    pub occasions: Vec<String>,
    pub budget_range: u32,
    pub adventurousness: u32,
}

/// Editable state of the preferences step
#[derive(Debug, Clone)]
pub struct PreferencesForm {
    palette: Option<&'static str>,
    styles: Vec<&'static str>,
    occasions: Vec<&'static str>,
    pub budget: u32,
    pub adventurousness: u32,
}

impl Default for PreferencesForm {
    fn default() -> Self {
        Self {
            palette: None,
            styles: Vec::new(),
            occasions: Vec::new(),
            budget: 500,
            adventurousness: 50,
        }
    }
}

impl PreferencesForm {
    pub fn palette(&self) -> Option<&'static str> {
        self.palette
    }

    pub fn select_palette(&mut self, id: &'static str) {
        self.palette = Some(id);
    }

    pub fn is_style_selected(&self, id: &str) -> bool {
        self.styles.contains(&id)
    }

    /// A style can be picked while fewer than three are chosen; chosen ones can always be dropped.
    pub fn can_toggle_style(&self, id: &str) -> bool {
        self.styles.len() < MAX_STYLES || self.is_style_selected(id)
    }

    pub fn style_limit_reached(&self) -> bool {
        self.styles.len() >= MAX_STYLES
    }

    pub fn toggle_style(&mut self, id: &'static str) -> bool {
        if !self.can_toggle_style(id) {
            return false;
        }
        toggle(&mut self.styles, id);
        true
    }

    pub fn is_occasion_selected(&self, id: &str) -> bool {
        self.occasions.contains(&id)
    }

    pub fn toggle_occasion(&mut self, id: &'static str) {
        toggle(&mut self.occasions, id);
    }

    pub fn set_budget(&mut self, value: u32) {
        self.budget = snap(value, BUDGET_RANGE, BUDGET_STEP);
    }

    pub fn set_adventurousness(&mut self, value: u32) {
        self.adventurousness = snap(value, ADVENTURE_RANGE, ADVENTURE_STEP);
    }

    pub fn is_complete(&self) -> bool {
        self.palette.is_some() && !self.styles.is_empty() && !self.occasions.is_empty()
    }

    pub fn submit(&self) -> Option<Preferences> {
        if !self.is_complete() {
            return None;
        }
        Some(Preferences {
            color_palette: self.palette?.to_string(),
            styles: self.styles.iter().map(|s| s.to_string()).collect(),
            occasions: self.occasions.iter().map(|s| s.to_string()).collect(),
            budget_range: self.budget,
            adventurousness: self.adventurousness,
        })
    }
}

fn toggle(selected: &mut Vec<&'static str>, id: &'static str) {
    if let Some(pos) = selected.iter().position(|s| *s == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}

pub(crate) fn snap(value: u32, range: RangeInclusive<u32>, step: u32) -> u32 {
    let (min, max) = (*range.start(), *range.end());
    let clamped = value.clamp(min, max);
    let steps = (clamped - min + step / 2) / step;
    (min + steps * step).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PreferencesForm {
        let mut form = PreferencesForm::default();
        form.select_palette("pastel");
        form.toggle_style("modern");
        form.toggle_occasion("work");
        form
    }

    #[test]
    fn test_defaults() {
        let form = PreferencesForm::default();

        assert_eq!(form.budget, 500);
        assert_eq!(form.adventurousness, 50);
        assert!(!form.is_complete());
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_complete_form_submits() {
        let preferences = filled_form().submit().unwrap();

        assert_eq!(preferences.color_palette, "pastel");
        assert_eq!(preferences.styles, vec!["modern"]);
        assert_eq!(preferences.occasions, vec!["work"]);
        assert_eq!(preferences.budget_range, 500);
    }

    #[test]
    fn test_each_section_is_required() {
        let mut form = PreferencesForm::default();
        form.select_palette("warm");
        form.toggle_style("classic");
        assert!(!form.is_complete());

        form.toggle_occasion("party");
        assert!(form.is_complete());

        form.toggle_occasion("party");
        assert!(!form.is_complete());
    }

    #[test]
    fn test_at_most_three_styles() {
        let mut form = PreferencesForm::default();

        assert!(form.toggle_style("classic"));
        assert!(form.toggle_style("modern"));
        assert!(form.toggle_style("edgy"));
        assert!(form.style_limit_reached());

        assert!(!form.toggle_style("sporty"));
        assert!(!form.is_style_selected("sporty"));

        // уже выбранный можно снять
        assert!(form.toggle_style("modern"));
        assert!(form.toggle_style("sporty"));
    }

    #[test]
    fn test_sliders_snap_to_step() {
        let mut form = PreferencesForm::default();

        form.set_budget(730);
        assert_eq!(form.budget, 750);
        form.set_budget(10);
        assert_eq!(form.budget, 100);
        form.set_budget(99_999);
        assert_eq!(form.budget, 2000);

        form.set_adventurousness(44);
        assert_eq!(form.adventurousness, 40);
        form.set_adventurousness(250);
        assert_eq!(form.adventurousness, 100);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(filled_form().submit().unwrap()).unwrap();

        assert_eq!(json["colorPalette"], "pastel");
        assert_eq!(json["budgetRange"], 500);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<&str> = STYLES.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), STYLES.len());
    }
}
