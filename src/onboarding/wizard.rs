/// Onboarding steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Welcome,
    Photo,
    Preferences,
    Behavioral,
    Results,
    Assistant,
}

/// How a step looks in the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Welcome,
        WizardStep::Photo,
        WizardStep::Preferences,
        WizardStep::Behavioral,
        WizardStep::Results,
        WizardStep::Assistant,
    ];

    /// 1-based position, as shown to the user ("Passo 3 de 6").
    pub fn number(self) -> usize {
        self.index() + 1
    }

    fn index(self) -> usize {
        match self {
            WizardStep::Welcome => 0,
            WizardStep::Photo => 1,
            WizardStep::Preferences => 2,
            WizardStep::Behavioral => 3,
            WizardStep::Results => 4,
            WizardStep::Assistant => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Welcome => "Bem-vindo",
            WizardStep::Photo => "Sua Foto",
            WizardStep::Preferences => "Preferências",
            WizardStep::Behavioral => "Comportamento",
            WizardStep::Results => "Resultados",
            WizardStep::Assistant => "Assistente IA",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WizardStep::Welcome => "Vamos começar seu perfil personalizado",
            WizardStep::Photo => "Faça upload da sua foto para análise",
            WizardStep::Preferences => "Conte-nos sobre seu estilo pessoal",
            WizardStep::Behavioral => "Suas preferências comportamentais",
            WizardStep::Results => "Sua análise facial personalizada",
            WizardStep::Assistant => "Converse com sua consultora virtual",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WizardStep::Welcome => "👤",
            WizardStep::Photo => "📷",
            WizardStep::Preferences => "✨",
            WizardStep::Behavioral => "🧠",
            WizardStep::Results => "✔",
            WizardStep::Assistant => "💬",
        }
    }
}

/// Current position in the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    current: WizardStep,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            current: WizardStep::Welcome,
        }
    }
}

impl Wizard {
    pub fn current(&self) -> WizardStep {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.current.index() == WizardStep::ALL.len() - 1
    }

    /// Moves forward; stays put on the last step. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        match WizardStep::ALL.get(self.current.index() + 1) {
            Some(&step) => self.go_to(step),
            None => false,
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.go_to(WizardStep::ALL[self.current.index() - 1])
    }

    pub fn go_to(&mut self, step: WizardStep) -> bool {
        if step == self.current {
            return false;
        }
        log::info!("➡️  Шаг {}: {}", step.number(), step.title());
        self.current = step;
        true
    }

    /// Percentage of the flow reached, counting the current step.
    pub fn progress(&self) -> f32 {
        self.current.number() as f32 / WizardStep::ALL.len() as f32 * 100.0
    }

    pub fn state_of(&self, step: WizardStep) -> StepState {
        use std::cmp::Ordering;
        match step.index().cmp(&self.current.index()) {
            Ordering::Less => StepState::Completed,
            Ordering::Equal => StepState::Active,
            Ordering::Greater => StepState::Upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_welcome() {
        let wizard = Wizard::default();

        assert_eq!(wizard.current(), WizardStep::Welcome);
        assert!(wizard.is_first());
        assert!(!wizard.is_last());
    }

    #[test]
    fn test_next_stops_at_last_step() {
        let mut wizard = Wizard::default();

        for _ in 0..5 {
            assert!(wizard.next());
        }
        assert_eq!(wizard.current(), WizardStep::Assistant);
        assert!(wizard.is_last());
        assert!(!wizard.next());
        assert_eq!(wizard.current(), WizardStep::Assistant);
    }

    #[test]
    fn test_prev_stops_at_first_step() {
        let mut wizard = Wizard::default();

        assert!(!wizard.prev());
        wizard.next();
        assert!(wizard.prev());
        assert_eq!(wizard.current(), WizardStep::Welcome);
    }

    #[test]
    fn test_progress() {
        let mut wizard = Wizard::default();
        assert!((wizard.progress() - 100.0 / 6.0).abs() < 1e-4);

        wizard.go_to(WizardStep::Behavioral);
        assert!((wizard.progress() - 400.0 / 6.0).abs() < 1e-4);

        wizard.go_to(WizardStep::Assistant);
        assert_eq!(wizard.progress(), 100.0);
    }

    #[test]
    fn test_step_states() {
        let mut wizard = Wizard::default();
        wizard.go_to(WizardStep::Preferences);

        assert_eq!(wizard.state_of(WizardStep::Welcome), StepState::Completed);
        assert_eq!(wizard.state_of(WizardStep::Photo), StepState::Completed);
        assert_eq!(wizard.state_of(WizardStep::Preferences), StepState::Active);
        assert_eq!(wizard.state_of(WizardStep::Results), StepState::Upcoming);
    }

    #[test]
    fn test_numbers_follow_order() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.number(), i + 1);
        }
    }
}
