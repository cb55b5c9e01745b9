//! Application state for the terminal front end.
//!
//! `App` owns everything a page needs: the current route, input modes, the
//! wizard controller, settings, and the channel that background generation
//! jobs report back on.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{SecondsFormat, Utc};

use super::controller::{Job, JobOutcome, WizardController};
use super::routes::{nav_routes, Route};
use crate::domain::catalog::{
    custom_app, example_prompts, filter_templates, templates, TemplateFilter, DIFFICULTY_FILTERS,
    TEMPLATE_CATEGORIES,
};
use crate::domain::{SavedAutomation, Template, WizardStep};
use crate::infrastructure::{
    copy_to_clipboard, default_download_dir, download_blueprint, shared_api_key, AppConfig,
    AutomationRepository, GenerationClient, LocalStore, Settings, SharedApiKey,
};

/// How keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Keys navigate and trigger actions.
    Normal,
    /// Keys edit the text of one field.
    Editing(Field),
    /// Keys type a path to navigate to.
    GoTo,
    /// The help popup is open.
    Help,
}

/// Which half of the screen receives navigation keys in normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Page,
}

/// Text fields that can be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    AutomationName,
    CustomAppName,
    CustomAppCategory,
    CustomAppDescription,
    TemplateSearch,
    ProfileName,
    ApiKey,
}

impl Field {
    /// Name shown in the status bar while the field is edited.
    pub fn label(self) -> &'static str {
        match self {
            Field::Description => "What do you want to automate?",
            Field::AutomationName => "Automation name",
            Field::CustomAppName => "Custom app name",
            Field::CustomAppCategory => "Custom app category",
            Field::CustomAppDescription => "Custom app description",
            Field::TemplateSearch => "Search templates",
            Field::ProfileName => "Profile name",
            Field::ApiKey => "Gemini API key",
        }
    }
}

/// The two lists on the configure step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureColumn {
    Triggers,
    Actions,
}

/// Rows of the settings page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    ProfileName,
    ApiKey,
    DarkMode,
    Language,
    Notifications,
}

impl SettingsField {
    /// Every row in display order.
    pub const ALL: [SettingsField; 5] = [
        SettingsField::ProfileName,
        SettingsField::ApiKey,
        SettingsField::DarkMode,
        SettingsField::Language,
        SettingsField::Notifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsField::ProfileName => "Profile Name",
            SettingsField::ApiKey => "Gemini API Key",
            SettingsField::DarkMode => "Dark Mode",
            SettingsField::Language => "Language",
            SettingsField::Notifications => "Enable Notifications",
        }
    }
}

/// Fields of the custom app form on the app selection step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomAppDraft {
    pub name: String,
    pub category: String,
    pub description: String,
}

/// Main application state.
///
/// Holds the current page, focus and key mode, the wizard controller, the
/// per-page cursors, and the settings. Background generation jobs report
/// back through an in-process channel drained by [`App::poll_jobs`].
pub struct App {
    pub config: AppConfig,
    pub store: LocalStore,
    generation: GenerationClient,
    api_key: SharedApiKey,
    jobs_tx: Sender<JobOutcome>,
    jobs_rx: Receiver<JobOutcome>,
    /// Current page
    pub route: Route,
    /// Menu or page
    pub focus: Focus,
    /// Highlighted sidebar entry
    pub sidebar_index: usize,
    /// How the next key press is interpreted
    pub mode: AppMode,
    /// Edit buffer for `AppMode::Editing` and `AppMode::GoTo`
    pub input: String,
    /// Cursor position within the input buffer, in characters
    pub cursor_position: usize,
    /// One-shot message for the status bar, cleared on the next key press
    pub status_message: Option<String>,
    /// First visible line of the help popup
    pub help_scroll: usize,
    pub controller: WizardController,
    /// Highlighted app on the app selection step
    pub app_cursor: usize,
    /// Active list on the configure step
    pub configure_column: ConfigureColumn,
    pub trigger_cursor: usize,
    pub action_cursor: usize,
    /// Custom app form, filled one field at a time
    pub custom_app: CustomAppDraft,
    /// Settings as last saved
    pub settings: Settings,
    /// Settings as being edited on the settings page
    pub settings_draft: Settings,
    pub settings_cursor: usize,
    pub template_filter: TemplateFilter,
    pub template_cursor: usize,
    pub history_cursor: usize,
    /// Where downloaded blueprints are written
    pub download_dir: PathBuf,
    pub should_quit: bool,
}

impl App {
    /// Builds the app from configuration: opens the store and points the
    /// generation client at Gemini.
    pub fn from_config(config: AppConfig) -> Result<Self, crate::domain::GenerationError> {
        let store = LocalStore::open(config.store_path());
        let settings = Settings::load(&store);
        let api_key = shared_api_key(config.resolve_api_key(&settings.api_key));
        let generation = GenerationClient::gemini(&config, api_key.clone())?;
        Ok(Self::new(config, store, generation, api_key))
    }

    /// Creates the app around an already opened store and generation
    /// client. Settings are loaded from `store`, and the page starts on the
    /// dashboard with the menu focused.
    pub fn new(config: AppConfig, store: LocalStore, generation: GenerationClient, api_key: SharedApiKey) -> Self {
        let settings = Settings::load(&store);
        let (jobs_tx, jobs_rx) = mpsc::channel();
        Self {
            config,
            store,
            generation,
            api_key,
            jobs_tx,
            jobs_rx,
            route: Route::Dashboard,
            focus: Focus::Sidebar,
            sidebar_index: 0,
            mode: AppMode::Normal,
            input: String::new(),
            cursor_position: 0,
            status_message: None,
            help_scroll: 0,
            controller: WizardController::default(),
            app_cursor: 0,
            configure_column: ConfigureColumn::Triggers,
            trigger_cursor: 0,
            action_cursor: 0,
            custom_app: CustomAppDraft::default(),
            settings_draft: settings.clone(),
            settings,
            settings_cursor: 0,
            template_filter: TemplateFilter::default(),
            template_cursor: 0,
            history_cursor: 0,
            download_dir: default_download_dir(),
            should_quit: false,
        }
    }

    // ----- navigation -----

    /// Shows `route`. Leaving the creation page discards the wizard.
    pub fn navigate(&mut self, route: Route) {
        if self.route == Route::Create && route != Route::Create {
            self.reset_wizard();
        }
        if route == Route::Settings {
            self.settings_draft = self.settings.clone();
            self.settings_cursor = 0;
        }
        if route == Route::History {
            self.history_cursor = 0;
        }
        if let Some(index) = nav_routes().iter().position(|r| *r == route) {
            self.sidebar_index = index;
        }
        tracing::debug!(path = route.path(), "navigate");
        self.route = route;
        self.focus = Focus::Page;
    }

    /// Navigates to a typed path. Unknown paths show the not-found page.
    pub fn go_to_path(&mut self, path: &str) {
        self.navigate(Route::from_path(path));
    }

    /// Moves the menu highlight up one entry, stopping at the first.
    pub fn sidebar_up(&mut self) {
        self.sidebar_index = self.sidebar_index.saturating_sub(1);
    }

    /// Moves the menu highlight down one entry, stopping at the last.
    pub fn sidebar_down(&mut self) {
        if self.sidebar_index + 1 < nav_routes().len() {
            self.sidebar_index += 1;
        }
    }

    /// Opens the highlighted menu entry and hands focus to the page.
    pub fn open_sidebar_selection(&mut self) {
        if let Some(route) = nav_routes().get(self.sidebar_index).cloned() {
            self.navigate(route);
        }
    }

    /// Switches keys between the menu and the page.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Page,
            Focus::Page => Focus::Sidebar,
        };
    }

    /// Opens the go-to prompt, pre-filled with the current path.
    pub fn start_go_to(&mut self) {
        self.mode = AppMode::GoTo;
        self.input = self.route.path().to_string();
        self.cursor_position = self.input.chars().count();
    }

    /// Leaves the prompt and navigates to whatever was typed.
    pub fn finish_go_to(&mut self) {
        let path = std::mem::take(&mut self.input);
        self.mode = AppMode::Normal;
        self.cursor_position = 0;
        self.go_to_path(&path);
    }

    // ----- text editing -----

    /// Enters edit mode for `field`, with the buffer seeded from its
    /// current value and the cursor at the end.
    pub fn start_editing(&mut self, field: Field) {
        self.input = self.field_value(field);
        self.cursor_position = self.input.chars().count();
        self.mode = AppMode::Editing(field);
    }

    /// Stores the edit buffer into the field being edited. The custom app
    /// form walks its three fields in order and adds the app after the last.
    pub fn finish_editing(&mut self) {
        let AppMode::Editing(field) = self.mode else {
            return;
        };
        let value = std::mem::take(&mut self.input);
        self.mode = AppMode::Normal;
        self.cursor_position = 0;

        match field {
            Field::Description => self.controller.wizard.set_description(&value),
            Field::AutomationName => self.controller.wizard.set_name(&value),
            Field::CustomAppName => {
                self.custom_app.name = value;
                self.start_editing(Field::CustomAppCategory);
            }
            Field::CustomAppCategory => {
                self.custom_app.category = value;
                self.start_editing(Field::CustomAppDescription);
            }
            Field::CustomAppDescription => {
                self.custom_app.description = value;
                self.add_custom_app();
            }
            Field::TemplateSearch => {
                self.template_filter.query = value;
                self.template_cursor = 0;
            }
            Field::ProfileName => self.settings_draft.profile_name = value,
            Field::ApiKey => self.settings_draft.api_key = value,
        }
    }

    /// Drops the edit buffer without storing it. Also abandons a custom
    /// app form part way through.
    pub fn cancel_editing(&mut self) {
        if matches!(
            self.mode,
            AppMode::Editing(Field::CustomAppName | Field::CustomAppCategory | Field::CustomAppDescription)
        ) {
            self.custom_app = CustomAppDraft::default();
        }
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    fn field_value(&self, field: Field) -> String {
        match field {
            Field::Description => self.controller.wizard.description.clone(),
            Field::AutomationName => self.controller.wizard.name.clone(),
            Field::CustomAppName => self.custom_app.name.clone(),
            Field::CustomAppCategory => self.custom_app.category.clone(),
            Field::CustomAppDescription => self.custom_app.description.clone(),
            Field::TemplateSearch => self.template_filter.query.clone(),
            Field::ProfileName => self.settings_draft.profile_name.clone(),
            Field::ApiKey => self.settings_draft.api_key.clone(),
        }
    }

    /// Byte offset of the character cursor within `input`.
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Inserts `c` at the cursor and moves past it.
    pub fn insert_char(&mut self, c: char) {
        let index = self.byte_index();
        self.input.insert(index, c);
        self.cursor_position += 1;
    }

    /// Backspace.
    pub fn delete_char_before_cursor(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let index = self.byte_index();
            self.input.remove(index);
        }
    }

    /// Delete.
    pub fn delete_char_at_cursor(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            let index = self.byte_index();
            self.input.remove(index);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count());
    }

    /// Moves the cursor to the start of the buffer.
    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Moves the cursor past the last character.
    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input.chars().count();
    }

    // ----- wizard -----

    fn reset_wizard(&mut self) {
        self.controller.reset();
        self.app_cursor = 0;
        self.configure_column = ConfigureColumn::Triggers;
        self.trigger_cursor = 0;
        self.action_cursor = 0;
        self.custom_app = CustomAppDraft::default();
    }

    /// Starts the wizard, optionally pre-filled with a description.
    pub fn start_wizard(&mut self, description: Option<&str>) {
        self.reset_wizard();
        if let Some(description) = description {
            self.controller.wizard.set_description(description);
        }
        self.navigate(Route::Create);
    }

    /// Tries to advance the wizard.
    ///
    /// When the current step is incomplete, or its apps are still loading,
    /// the step stays put and the status bar says why. Any request the move
    /// needs is dispatched in the background.
    pub fn wizard_next(&mut self) {
        let before = self.controller.wizard.step;
        if let Some(job) = self.controller.advance() {
            self.dispatch(job);
        }
        if self.controller.wizard.step != before {
            self.app_cursor = 0;
            self.trigger_cursor = 0;
            self.action_cursor = 0;
            self.configure_column = ConfigureColumn::Triggers;
        } else if self.controller.loading_apps {
            self.status_message = Some("Still finding apps for your automation...".to_string());
        } else {
            self.status_message = Some(blocked_hint(before).to_string());
        }
    }

    /// Goes back one step. Nothing entered so far is lost.
    pub fn wizard_previous(&mut self) {
        self.controller.retreat();
    }

    /// Asks Gemini to order the chosen apps into likely triggers and
    /// actions.
    pub fn request_ranking(&mut self) {
        if let Some(job) = self.controller.request_ranking() {
            self.dispatch(job);
        }
    }

    /// Runs `job` on its own thread. The outcome arrives through
    /// [`App::poll_jobs`].
    fn dispatch(&self, job: Job) {
        let client = self.generation.clone();
        let tx = self.jobs_tx.clone();
        std::thread::spawn(move || {
            let outcome = job.run(&client);
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send(outcome);
        });
    }

    /// Applies every finished job. Returns how many were applied.
    pub fn poll_jobs(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.jobs_rx.try_recv() {
            if self.controller.apply(outcome) {
                applied += 1;
            }
        }
        applied
    }

    /// Uses the example prompt at `index` as the description. Out of range
    /// indices are ignored.
    pub fn choose_example_prompt(&mut self, index: usize) {
        if let Some(prompt) = example_prompts().get(index) {
            self.controller.wizard.set_description(prompt);
        }
    }

    pub fn app_cursor_up(&mut self) {
        self.app_cursor = self.app_cursor.saturating_sub(1);
    }

    pub fn app_cursor_down(&mut self) {
        let len = self.controller.wizard.catalog().len();
        if self.app_cursor + 1 < len {
            self.app_cursor += 1;
        }
    }

    /// Selects or deselects the highlighted app.
    pub fn toggle_highlighted_app(&mut self) {
        if let Some(app) = self.controller.wizard.catalog().get(self.app_cursor) {
            let id = app.id.clone();
            self.controller.wizard.toggle_app(&id);
        }
    }

    /// Starts the custom app form with an empty draft.
    pub fn start_custom_app(&mut self) {
        self.custom_app = CustomAppDraft::default();
        self.start_editing(Field::CustomAppName);
    }

    /// Adds the drafted app to the catalog and selects it. An incomplete
    /// draft is dropped with a hint.
    fn add_custom_app(&mut self) {
        let draft = std::mem::take(&mut self.custom_app);
        match custom_app(&draft.name, &draft.category, &draft.description, &custom_app_suffix()) {
            Some(app) => {
                self.status_message = Some(format!("Added {}", app.name));
                self.controller.wizard.add_custom_app(app);
            }
            None => {
                self.status_message = Some("Custom apps need a name, category and description".to_string());
            }
        }
    }

    /// Switches between the trigger and action lists.
    pub fn configure_switch_column(&mut self) {
        self.configure_column = match self.configure_column {
            ConfigureColumn::Triggers => ConfigureColumn::Actions,
            ConfigureColumn::Actions => ConfigureColumn::Triggers,
        };
    }

    pub fn configure_cursor_up(&mut self) {
        let cursor = match self.configure_column {
            ConfigureColumn::Triggers => &mut self.trigger_cursor,
            ConfigureColumn::Actions => &mut self.action_cursor,
        };
        *cursor = cursor.saturating_sub(1);
    }

    pub fn configure_cursor_down(&mut self) {
        let len = match self.configure_column {
            ConfigureColumn::Triggers => self.controller.wizard.trigger_options().len(),
            ConfigureColumn::Actions => self.controller.wizard.action_options().len(),
        };
        let cursor = match self.configure_column {
            ConfigureColumn::Triggers => &mut self.trigger_cursor,
            ConfigureColumn::Actions => &mut self.action_cursor,
        };
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    /// Picks the highlighted trigger, or toggles the highlighted action.
    pub fn configure_select(&mut self) {
        let wizard = &mut self.controller.wizard;
        match self.configure_column {
            ConfigureColumn::Triggers => {
                if let Some(app) = wizard.trigger_options().get(self.trigger_cursor) {
                    let id = app.id.clone();
                    wizard.set_trigger(&id);
                }
            }
            ConfigureColumn::Actions => {
                if let Some(app) = wizard.action_options().get(self.action_cursor) {
                    let id = app.id.clone();
                    wizard.toggle_action(&id);
                }
            }
        }
    }

    /// Copies the generated blueprint to the system clipboard.
    pub fn copy_blueprint(&mut self) {
        let text = self.controller.wizard.blueprint.text().to_string();
        self.copy_text(&text, "Blueprint copied to clipboard");
    }

    /// Writes the blueprint to `<name>.json` in the download directory.
    /// Needs both a blueprint and a name.
    pub fn download_blueprint(&mut self) {
        let wizard = &self.controller.wizard;
        let blueprint = wizard.blueprint.text();
        if blueprint.is_empty() || wizard.name.trim().is_empty() {
            self.status_message = Some("Nothing to download yet".to_string());
            return;
        }
        self.status_message = Some(match download_blueprint(&self.download_dir, &wizard.name, blueprint) {
            Ok(path) => format!("Downloaded to {}", path.display()),
            Err(e) => format!("Download failed: {}", e),
        });
    }

    /// Saves the finished automation, then returns to the dashboard with a
    /// fresh wizard.
    pub fn complete_automation(&mut self) {
        let wizard = &self.controller.wizard;
        if wizard.name.trim().is_empty() || wizard.blueprint.text().is_empty() {
            self.status_message = Some("Name and blueprint are required before saving".to_string());
            return;
        }
        let record = SavedAutomation {
            name: wizard.name.clone(),
            description: wizard.description.clone(),
            trigger: wizard.trigger.clone().unwrap_or_default(),
            actions: wizard.actions.clone(),
            blueprint: wizard.blueprint.text().to_string(),
            created: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        match AutomationRepository::append(&mut self.store, record) {
            Ok(_) => {
                self.navigate(Route::Dashboard);
                self.status_message = Some("Automation saved!".to_string());
            }
            Err(e) => self.status_message = Some(format!("Save failed: {}", e)),
        }
    }

    fn copy_text(&mut self, text: &str, done: &str) {
        if text.is_empty() {
            self.status_message = Some("Nothing to copy".to_string());
            return;
        }
        self.status_message = Some(match copy_to_clipboard(text) {
            Ok(()) => done.to_string(),
            Err(e) => format!("Copy failed: {}", e),
        });
    }

    // ----- settings -----

    /// The settings row under the cursor.
    pub fn selected_setting(&self) -> SettingsField {
        SettingsField::ALL[self.settings_cursor.min(SettingsField::ALL.len() - 1)]
    }

    pub fn settings_up(&mut self) {
        self.settings_cursor = self.settings_cursor.saturating_sub(1);
    }

    pub fn settings_down(&mut self) {
        if self.settings_cursor + 1 < SettingsField::ALL.len() {
            self.settings_cursor += 1;
        }
    }

    /// Edits a text setting or flips a toggle.
    pub fn activate_setting(&mut self) {
        match self.selected_setting() {
            SettingsField::ProfileName => self.start_editing(Field::ProfileName),
            SettingsField::ApiKey => self.start_editing(Field::ApiKey),
            SettingsField::DarkMode => self.toggle_dark_mode(),
            SettingsField::Language => self.settings_draft.cycle_language(),
            SettingsField::Notifications => {
                self.settings_draft.notifications = !self.settings_draft.notifications;
            }
        }
    }

    /// Flips the theme and persists it at once, without waiting for save.
    pub fn toggle_dark_mode(&mut self) {
        let dark_mode = !self.settings.dark_mode;
        self.settings.dark_mode = dark_mode;
        self.settings_draft.dark_mode = dark_mode;
        if let Err(e) = self.settings.save_dark_mode(&mut self.store) {
            self.status_message = Some(format!("Save failed: {}", e));
        }
    }

    /// Persists the settings draft. A new API key takes effect on the next
    /// request without restarting.
    pub fn save_settings(&mut self) {
        match self.settings_draft.save(&mut self.store) {
            Ok(()) => {
                self.settings = self.settings_draft.clone();
                let key = self.config.resolve_api_key(&self.settings.api_key);
                if let Ok(mut shared) = self.api_key.write() {
                    *shared = key;
                }
                tracing::info!("settings saved");
                self.status_message = Some("Settings saved!".to_string());
            }
            Err(e) => self.status_message = Some(format!("Save failed: {}", e)),
        }
    }

    // ----- templates -----

    /// Templates matching the current search and filters.
    pub fn visible_templates(&self) -> Vec<Template> {
        let all = templates();
        filter_templates(&all, &self.template_filter).into_iter().cloned().collect()
    }

    pub fn template_up(&mut self) {
        self.template_cursor = self.template_cursor.saturating_sub(1);
    }

    pub fn template_down(&mut self) {
        if self.template_cursor + 1 < self.visible_templates().len() {
            self.template_cursor += 1;
        }
    }

    /// Steps the category filter to the next value, wrapping to "All".
    pub fn cycle_template_category(&mut self) {
        self.template_filter.category = next_option(&TEMPLATE_CATEGORIES, &self.template_filter.category);
        self.template_cursor = 0;
    }

    /// Steps the difficulty filter, wrapping like the category filter.
    pub fn cycle_template_difficulty(&mut self) {
        self.template_filter.difficulty = next_option(&DIFFICULTY_FILTERS, &self.template_filter.difficulty);
        self.template_cursor = 0;
    }

    /// Clears the search and both filters.
    pub fn clear_template_filters(&mut self) {
        self.template_filter = TemplateFilter::default();
        self.template_cursor = 0;
    }

    /// Opens the wizard with the highlighted template's description.
    pub fn use_template(&mut self) {
        if let Some(template) = self.visible_templates().get(self.template_cursor) {
            let description = template.description;
            self.start_wizard(Some(description));
        }
    }

    // ----- history -----

    /// Saved automations, newest first.
    pub fn saved_automations(&self) -> Vec<SavedAutomation> {
        let mut saved = AutomationRepository::list(&self.store);
        saved.reverse();
        saved
    }

    pub fn history_up(&mut self) {
        self.history_cursor = self.history_cursor.saturating_sub(1);
    }

    pub fn history_down(&mut self) {
        if self.history_cursor + 1 < self.saved_automations().len() {
            self.history_cursor += 1;
        }
    }

    /// Copies the blueprint of the highlighted saved automation.
    pub fn copy_history_blueprint(&mut self) {
        if let Some(record) = self.saved_automations().get(self.history_cursor) {
            let text = record.blueprint.clone();
            self.copy_text(&text, "Blueprint copied to clipboard");
        }
    }
}

/// Status line for a step whose guard refuses to advance.
fn blocked_hint(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Describe => "Describe your automation in more than 10 characters",
        WizardStep::SelectApps => "Select at least 2 apps",
        WizardStep::Configure => "Name the automation, pick a trigger and at least one action",
        WizardStep::Review => "Press s to save, d to download or c to copy",
    }
}

/// The option after `current`, wrapping around. An unknown value restarts
/// at the first option.
fn next_option(options: &[&str], current: &str) -> String {
    let index = options.iter().position(|o| *o == current);
    let next = index.map(|i| (i + 1) % options.len()).unwrap_or(0);
    options[next].to_string()
}

/// Five lowercase base-36 characters from the clock, to keep custom app ids
/// apart.
fn custom_app_suffix() -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut n = Utc::now().timestamp_nanos_opt().unwrap_or_default().unsigned_abs();
    (0..5)
        .map(|_| {
            let c = DIGITS[(n % 36) as usize] as char;
            n /= 36;
            c
        })
        .collect()
}
