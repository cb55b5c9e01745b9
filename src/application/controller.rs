//! Wizard controller: drives the wizard state machine and the generation
//! calls its transitions ask for.
//!
//! Calls are split into a [`Job`] (what to ask), run anywhere, and a
//! [`JobOutcome`] applied back on the UI thread. The controller raises a
//! loading flag when it hands out a job and lowers it when the outcome is
//! applied, whatever the outcome was. Errors end up as display strings.

use crate::domain::{
    AppDescriptor, Blueprint, GenerationResult, RankedApps, StepEffect, Transition, WizardState, WizardStep,
};
use crate::infrastructure::GenerationClient;

/// A generation request tagged with the wizard session that asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub session: u64,
    pub kind: JobKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobKind {
    RecommendApps { description: String },
    RankApps { description: String, apps: Vec<AppDescriptor> },
    GenerateBlueprint { request: String },
}

#[derive(Debug)]
pub struct JobOutcome {
    pub session: u64,
    pub result: OutcomeKind,
}

#[derive(Debug)]
pub enum OutcomeKind {
    Recommended(GenerationResult<Vec<AppDescriptor>>),
    Ranked(GenerationResult<RankedApps>),
    Blueprint(GenerationResult<Blueprint>),
}

impl Job {
    /// Performs the request. Blocks for as long as the call takes.
    pub fn run(self, client: &GenerationClient) -> JobOutcome {
        let result = match self.kind {
            JobKind::RecommendApps { description } => OutcomeKind::Recommended(client.recommend_apps(&description)),
            JobKind::RankApps { description, apps } => OutcomeKind::Ranked(client.rank_apps(&description, &apps)),
            JobKind::GenerateBlueprint { request } => OutcomeKind::Blueprint(client.generate_blueprint(&request)),
        };
        JobOutcome { session: self.session, result }
    }
}

#[derive(Debug, Default)]
pub struct WizardController {
    pub wizard: WizardState,
    session: u64,
    pub loading_apps: bool,
    pub apps_error: Option<String>,
    pub loading_ranking: bool,
    pub ranking_error: Option<String>,
    pub loading_blueprint: bool,
    pub blueprint_error: Option<String>,
}

impl WizardController {
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Starts a fresh wizard. Outcomes of jobs handed out before the reset
    /// are ignored when they arrive.
    pub fn reset(&mut self) {
        let session = self.session + 1;
        *self = Self { session, ..Self::default() };
    }

    /// Moves forward if the current step's guard holds. Returns the job the
    /// caller must run, if the transition needs one.
    ///
    /// App selection stays open until the recommendation for it has landed,
    /// so a late reply can never replace apps already chosen downstream.
    pub fn advance(&mut self) -> Option<Job> {
        if self.loading_apps && self.wizard.step == WizardStep::SelectApps {
            return None;
        }
        let Transition::Moved { to, effect } = self.wizard.advance() else {
            return None;
        };
        tracing::debug!(step = to.number(), "wizard advanced");

        let kind = match effect {
            StepEffect::None => return None,
            StepEffect::RecommendApps { description } => {
                self.loading_apps = true;
                self.apps_error = None;
                JobKind::RecommendApps { description }
            }
            StepEffect::GenerateBlueprint { request } => {
                self.loading_blueprint = true;
                self.blueprint_error = None;
                JobKind::GenerateBlueprint { request }
            }
        };
        Some(Job { session: self.session, kind })
    }

    pub fn retreat(&mut self) -> bool {
        self.wizard.retreat()
    }

    /// Asks for AI-ranked trigger and action candidates. Only offered on the
    /// configure step, with at least one app selected.
    pub fn request_ranking(&mut self) -> Option<Job> {
        if self.wizard.step != WizardStep::Configure {
            return None;
        }
        let apps = self.wizard.selected_app_descriptors();
        if apps.is_empty() {
            return None;
        }
        self.loading_ranking = true;
        self.ranking_error = None;
        Some(Job {
            session: self.session,
            kind: JobKind::RankApps { description: self.wizard.description.clone(), apps },
        })
    }

    pub fn is_loading(&self) -> bool {
        self.loading_apps || self.loading_ranking || self.loading_blueprint
    }

    /// Lands a finished job. Returns `false` if it belonged to an earlier
    /// session and was dropped.
    pub fn apply(&mut self, outcome: JobOutcome) -> bool {
        if outcome.session != self.session {
            tracing::debug!(stale = outcome.session, current = self.session, "dropping stale outcome");
            return false;
        }
        match outcome.result {
            OutcomeKind::Recommended(result) => {
                self.loading_apps = false;
                if self.wizard.step != WizardStep::SelectApps {
                    tracing::debug!(step = self.wizard.step.number(), "ignoring recommendation off the app step");
                    return true;
                }
                match result {
                    Ok(apps) => {
                        tracing::info!(count = apps.len(), "recommended apps received");
                        self.wizard.apply_recommendations(apps);
                    }
                    Err(err) => self.apps_error = Some(err.to_string()),
                }
            }
            OutcomeKind::Ranked(result) => {
                self.loading_ranking = false;
                match result {
                    Ok(ranked) => self.wizard.apply_ranking(ranked),
                    Err(err) => self.ranking_error = Some(err.to_string()),
                }
            }
            OutcomeKind::Blueprint(result) => {
                self.loading_blueprint = false;
                match result {
                    Ok(blueprint) => self.wizard.set_blueprint(blueprint),
                    Err(err) => self.blueprint_error = Some(err.to_string()),
                }
            }
        }
        true
    }
}
