//! The creation wizard as an explicit finite-state machine.
//!
//! The wizard walks four states in order. Each state has one guard that
//! decides whether the user may move forward, and each forward move may
//! hand back a side effect for the caller to perform (asking the
//! generation service for apps or for a blueprint). The state machine
//! itself never talks to the network.

use super::catalog::demo_apps;
use super::decoder::Blueprint;
use super::models::{AppDescriptor, RankedApps};
use super::prompts::blueprint_request;

pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MIN_SELECTED_APPS: usize = 2;
pub const TOTAL_STEPS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Describe,
    SelectApps,
    Configure,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; TOTAL_STEPS] =
        [WizardStep::Describe, WizardStep::SelectApps, WizardStep::Configure, WizardStep::Review];

    /// One-based position, as shown to the user.
    pub fn number(self) -> usize {
        match self {
            WizardStep::Describe => 1,
            WizardStep::SelectApps => 2,
            WizardStep::Configure => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Describe => "Describe",
            WizardStep::SelectApps => "Apps",
            WizardStep::Configure => "Configure",
            WizardStep::Review => "Review",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Describe => Some(WizardStep::SelectApps),
            WizardStep::SelectApps => Some(WizardStep::Configure),
            WizardStep::Configure => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Describe => None,
            WizardStep::SelectApps => Some(WizardStep::Describe),
            WizardStep::Configure => Some(WizardStep::SelectApps),
            WizardStep::Review => Some(WizardStep::Configure),
        }
    }
}

/// Work the caller must start after a successful forward move.
#[derive(Debug, Clone, PartialEq)]
pub enum StepEffect {
    None,
    /// Ask for a recommended app list for this description.
    RecommendApps { description: String },
    /// Ask for a full blueprint for this composed request.
    GenerateBlueprint { request: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Blocked,
    Moved { to: WizardStep, effect: StepEffect },
}

/// Everything the wizard has collected so far.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub description: String,
    /// Selected app ids in the order they were picked.
    pub selected_apps: Vec<String>,
    /// Replaces the demo catalog once set.
    pub recommended_apps: Option<Vec<AppDescriptor>>,
    pub trigger: Option<String>,
    pub actions: Vec<String>,
    pub name: String,
    pub blueprint: Blueprint,
    pub trigger_candidates: Vec<AppDescriptor>,
    pub action_candidates: Vec<AppDescriptor>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: WizardStep::Describe,
            description: String::new(),
            selected_apps: Vec::new(),
            recommended_apps: None,
            trigger: None,
            actions: Vec::new(),
            name: String::new(),
            blueprint: Blueprint::Empty,
            trigger_candidates: Vec::new(),
            action_candidates: Vec::new(),
        }
    }
}

impl WizardState {
    /// The apps the user can currently pick from.
    pub fn catalog(&self) -> Vec<AppDescriptor> {
        self.recommended_apps.clone().unwrap_or_else(demo_apps)
    }

    pub fn find_app(&self, id: &str) -> Option<AppDescriptor> {
        self.catalog().into_iter().find(|app| app.id == id)
    }

    /// The guard of the current state.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Describe => self.description.trim().chars().count() > MIN_DESCRIPTION_CHARS,
            WizardStep::SelectApps => self.selected_apps.len() >= MIN_SELECTED_APPS,
            WizardStep::Configure => {
                !self.name.trim().is_empty() && self.trigger.is_some() && !self.actions.is_empty()
            }
            WizardStep::Review => true,
        }
    }

    pub fn advance(&mut self) -> Transition {
        if !self.can_advance() {
            return Transition::Blocked;
        }
        let Some(to) = self.step.next() else {
            return Transition::Blocked;
        };

        let effect = match self.step {
            WizardStep::Describe => StepEffect::RecommendApps { description: self.description.clone() },
            WizardStep::SelectApps => {
                self.partition_candidates();
                StepEffect::None
            }
            WizardStep::Configure => StepEffect::GenerateBlueprint { request: self.compose_request() },
            WizardStep::Review => StepEffect::None,
        };
        self.step = to;
        Transition::Moved { to, effect }
    }

    /// Moves back one state. Collected data is kept.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn toggle_app(&mut self, id: &str) {
        toggle(&mut self.selected_apps, id);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_apps.iter().any(|s| s == id)
    }

    pub fn set_trigger(&mut self, id: &str) {
        self.trigger = Some(id.to_string());
    }

    pub fn toggle_action(&mut self, id: &str) {
        toggle(&mut self.actions, id);
    }

    pub fn is_action(&self, id: &str) -> bool {
        self.actions.iter().any(|a| a == id)
    }

    /// Appends a user-defined app to the catalog and selects it.
    pub fn add_custom_app(&mut self, app: AppDescriptor) {
        let mut catalog = self.catalog();
        self.selected_apps.push(app.id.clone());
        catalog.push(app);
        self.recommended_apps = Some(catalog);
    }

    /// Replaces the catalog with recommended apps, all of them selected.
    pub fn apply_recommendations(&mut self, apps: Vec<AppDescriptor>) {
        self.selected_apps = apps.iter().map(|app| app.id.clone()).collect();
        self.recommended_apps = Some(apps);
    }

    /// Overrides the candidate lists with ranked ones. An empty ranked list
    /// leaves the corresponding candidates alone.
    pub fn apply_ranking(&mut self, ranked: RankedApps) {
        if !ranked.triggers.is_empty() {
            self.trigger_candidates = ranked.triggers;
        }
        if !ranked.actions.is_empty() {
            self.action_candidates = ranked.actions;
        }
    }

    pub fn set_blueprint(&mut self, blueprint: Blueprint) {
        self.blueprint = blueprint;
    }

    pub fn selected_app_descriptors(&self) -> Vec<AppDescriptor> {
        self.catalog()
            .into_iter()
            .filter(|app| self.is_selected(&app.id))
            .collect()
    }

    /// Trigger choices, falling back to the selected apps when no
    /// candidates are known.
    pub fn trigger_options(&self) -> Vec<AppDescriptor> {
        if self.trigger_candidates.is_empty() {
            self.selected_app_descriptors()
        } else {
            self.trigger_candidates.clone()
        }
    }

    /// Action choices, falling back to the selected apps minus the trigger.
    pub fn action_options(&self) -> Vec<AppDescriptor> {
        if self.action_candidates.is_empty() {
            self.selected_app_descriptors()
                .into_iter()
                .filter(|app| Some(&app.id) != self.trigger.as_ref())
                .collect()
        } else {
            self.action_candidates.clone()
        }
    }

    pub fn trigger_name(&self) -> Option<String> {
        let id = self.trigger.as_ref()?;
        Some(self.lookup_name(id))
    }

    pub fn action_names(&self) -> Vec<String> {
        self.actions.iter().map(|id| self.lookup_name(id)).collect()
    }

    pub fn progress_percent(&self) -> usize {
        self.step.number() * 100 / TOTAL_STEPS
    }

    fn lookup_name(&self, id: &str) -> String {
        self.find_app(id)
            .or_else(|| {
                self.trigger_candidates
                    .iter()
                    .chain(self.action_candidates.iter())
                    .find(|app| app.id == id)
                    .cloned()
            })
            .map(|app| app.name)
            .unwrap_or_else(|| id.to_string())
    }

    fn partition_candidates(&mut self) {
        let selected = self.selected_app_descriptors();
        self.action_candidates = selected
            .iter()
            .filter(|app| Some(&app.id) != self.trigger.as_ref())
            .cloned()
            .collect();
        self.trigger_candidates = selected;
    }

    fn compose_request(&self) -> String {
        let trigger = self.trigger_name().unwrap_or_default();
        let actions = self.action_names();
        let actions: Vec<&str> = actions.iter().map(String::as_str).collect();
        blueprint_request(&self.name, &self.description, &trigger, &actions)
    }
}

fn toggle(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|existing| existing == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_select_apps() -> WizardState {
        let mut wizard = WizardState::default();
        wizard.set_description("Send a welcome email to every new lead");
        assert!(matches!(wizard.advance(), Transition::Moved { .. }));
        wizard
    }

    fn at_configure() -> WizardState {
        let mut wizard = at_select_apps();
        wizard.toggle_app("webhook");
        wizard.toggle_app("gmail");
        wizard.toggle_app("hubspot");
        assert!(matches!(wizard.advance(), Transition::Moved { .. }));
        wizard
    }

    #[test]
    fn test_default_state() {
        let wizard = WizardState::default();
        assert_eq!(wizard.step, WizardStep::Describe);
        assert_eq!(wizard.catalog().len(), 6);
        assert_eq!(wizard.progress_percent(), 25);
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_description_boundary() {
        let mut wizard = WizardState::default();
        wizard.set_description("0123456789");
        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Transition::Blocked);
        assert_eq!(wizard.step, WizardStep::Describe);

        wizard.set_description("01234567890");
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_description_is_trimmed_before_counting() {
        let mut wizard = WizardState::default();
        wizard.set_description("   0123456789   ");
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_leaving_describe_requests_recommendations() {
        let mut wizard = WizardState::default();
        let description = "When a new lead fills out our contact form, send them a welcome email";
        wizard.set_description(description);

        let transition = wizard.advance();
        assert_eq!(
            transition,
            Transition::Moved {
                to: WizardStep::SelectApps,
                effect: StepEffect::RecommendApps { description: description.to_string() },
            }
        );
        assert_eq!(wizard.step, WizardStep::SelectApps);
    }

    #[test]
    fn test_selection_boundary() {
        let mut wizard = at_select_apps();
        assert!(!wizard.can_advance());
        wizard.toggle_app("gmail");
        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Transition::Blocked);

        wizard.toggle_app("slack");
        assert!(wizard.can_advance());
        wizard.toggle_app("hubspot");
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut wizard = at_select_apps();
        wizard.toggle_app("gmail");
        wizard.toggle_app("gmail");
        assert!(wizard.selected_apps.is_empty());
    }

    #[test]
    fn test_leaving_select_apps_partitions_candidates() {
        let wizard = at_configure();
        assert_eq!(wizard.step, WizardStep::Configure);
        let triggers: Vec<_> = wizard.trigger_candidates.iter().map(|a| a.id.as_str()).collect();
        // Catalog order, not selection order.
        assert_eq!(triggers, vec!["gmail", "webhook", "hubspot"]);
        assert_eq!(wizard.action_candidates, wizard.trigger_candidates);
    }

    #[test]
    fn test_partition_excludes_previously_chosen_trigger() {
        let mut wizard = at_configure();
        wizard.set_trigger("webhook");
        assert!(wizard.retreat());
        assert!(matches!(wizard.advance(), Transition::Moved { effect: StepEffect::None, .. }));

        let actions: Vec<_> = wizard.action_candidates.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(actions, vec!["gmail", "hubspot"]);
        assert_eq!(wizard.trigger_candidates.len(), 3);
    }

    #[test]
    fn test_configure_guard() {
        let mut wizard = at_configure();
        assert!(!wizard.can_advance());

        wizard.set_name("Lead welcome");
        wizard.set_trigger("webhook");
        assert!(!wizard.can_advance());

        wizard.toggle_action("gmail");
        assert!(wizard.can_advance());

        wizard.set_name("   ");
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_leaving_configure_composes_blueprint_request() {
        let mut wizard = at_configure();
        wizard.set_name("Lead welcome");
        wizard.set_trigger("webhook");
        wizard.toggle_action("gmail");
        wizard.toggle_action("hubspot");

        match wizard.advance() {
            Transition::Moved { to, effect: StepEffect::GenerateBlueprint { request } } => {
                assert_eq!(to, WizardStep::Review);
                assert_eq!(
                    request,
                    "Automation Name: Lead welcome\n\
                     Description: Send a welcome email to every new lead\n\
                     Trigger: Webhooks\n\
                     Actions: Gmail, HubSpot"
                );
            }
            other => panic!("unexpected transition: {:?}", other),
        }
    }

    #[test]
    fn test_review_never_advances() {
        let mut wizard = WizardState { step: WizardStep::Review, ..Default::default() };
        assert!(wizard.can_advance());
        assert_eq!(wizard.advance(), Transition::Blocked);
        assert_eq!(wizard.step, WizardStep::Review);
    }

    #[test]
    fn test_retreat_keeps_data_and_stops_at_first_step() {
        let mut wizard = at_select_apps();
        wizard.toggle_app("gmail");
        assert!(wizard.retreat());
        assert_eq!(wizard.step, WizardStep::Describe);
        assert!(!wizard.retreat());
        assert_eq!(wizard.selected_apps, vec!["gmail".to_string()]);
        assert!(!wizard.description.is_empty());
    }

    #[test]
    fn test_recommendations_replace_catalog_and_select_all() {
        let mut wizard = at_select_apps();
        wizard.apply_recommendations(vec![
            AppDescriptor::new("typeform", "Typeform", "Forms", "Collect responses"),
            AppDescriptor::new("mailchimp", "Mailchimp", "Email", "Email campaigns"),
        ]);
        assert_eq!(wizard.catalog().len(), 2);
        assert_eq!(wizard.selected_apps, vec!["typeform".to_string(), "mailchimp".to_string()]);
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_empty_recommendations_leave_user_stuck() {
        let mut wizard = at_select_apps();
        wizard.apply_recommendations(Vec::new());
        assert!(wizard.catalog().is_empty());
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_custom_app_extends_current_catalog() {
        let mut wizard = at_select_apps();
        wizard.add_custom_app(AppDescriptor::new("notion-ab12c", "Notion", "Docs", "Team wiki"));
        assert_eq!(wizard.catalog().len(), 7);
        assert!(wizard.is_selected("notion-ab12c"));
    }

    #[test]
    fn test_ranking_overrides_non_empty_lists_only() {
        let mut wizard = at_configure();
        let original_actions = wizard.action_candidates.clone();
        wizard.apply_ranking(RankedApps {
            triggers: vec![AppDescriptor::new("hubspot", "HubSpot", "CRM", "")],
            actions: Vec::new(),
        });
        assert_eq!(wizard.trigger_candidates.len(), 1);
        assert_eq!(wizard.action_candidates, original_actions);
    }

    #[test]
    fn test_option_fallbacks_exclude_trigger() {
        let mut wizard = at_configure();
        wizard.trigger_candidates.clear();
        wizard.action_candidates.clear();
        wizard.set_trigger("gmail");
        assert_eq!(wizard.trigger_options().len(), 3);
        let actions: Vec<_> = wizard.action_options().into_iter().map(|a| a.id).collect();
        assert_eq!(actions, vec!["webhook".to_string(), "hubspot".to_string()]);
    }

    #[test]
    fn test_names_resolve_through_catalog() {
        let mut wizard = at_configure();
        wizard.set_trigger("webhook");
        wizard.toggle_action("gmail");
        wizard.toggle_action("unknown-app");
        assert_eq!(wizard.trigger_name(), Some("Webhooks".to_string()));
        assert_eq!(wizard.action_names(), vec!["Gmail".to_string(), "unknown-app".to_string()]);
    }
}
