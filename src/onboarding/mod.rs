pub mod analysis;
pub mod behavioral;
pub mod photo;
pub mod preferences;
pub mod progress;
pub mod wizard;

pub use analysis::{AnalysisReport, AnalysisRun, Milestone};
pub use behavioral::{BehavioralForm, BehavioralProfile};
pub use photo::{PhotoInfo, PhotoUpload, UploadState};
pub use preferences::{Preferences, PreferencesForm};
pub use wizard::{StepState, Wizard, WizardStep};

use serde::Serialize;

/// What the user has handed over so far.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserProfile {
    pub photo: Option<PhotoInfo>,
    pub preferences: Option<Preferences>,
    pub behavioral: Option<BehavioralProfile>,
}
