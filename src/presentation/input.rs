use crate::application::{App, AppMode, Field, Focus, Route};
use crate::domain::WizardStep;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Editing(_) => Self::handle_text_input(app, key, App::finish_editing),
            AppMode::GoTo => Self::handle_text_input(app, key, App::finish_go_to),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.should_quit = true;
            return;
        }

        app.status_message = None;

        match key {
            KeyCode::Char('q') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                app.toggle_focus();
                return;
            }
            KeyCode::Char('g') => {
                app.start_go_to();
                return;
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
                return;
            }
            _ => {}
        }

        match app.focus {
            Focus::Sidebar => Self::handle_sidebar(app, key),
            Focus::Page => Self::handle_page(app, key),
        }
    }

    fn handle_sidebar(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.sidebar_up(),
            KeyCode::Down | KeyCode::Char('j') => app.sidebar_down(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.open_sidebar_selection(),
            _ => {}
        }
    }

    fn handle_page(app: &mut App, key: KeyCode) {
        if key == KeyCode::Esc {
            app.focus = Focus::Sidebar;
            return;
        }
        match app.route {
            Route::Dashboard => {
                if matches!(key, KeyCode::Char('n') | KeyCode::Enter) {
                    app.start_wizard(None);
                }
            }
            Route::Create => Self::handle_wizard(app, key),
            Route::Templates => Self::handle_templates(app, key),
            Route::History => match key {
                KeyCode::Up | KeyCode::Char('k') => app.history_up(),
                KeyCode::Down | KeyCode::Char('j') => app.history_down(),
                KeyCode::Char('c') => app.copy_history_blueprint(),
                _ => {}
            },
            Route::Settings => Self::handle_settings(app, key),
            Route::NotFound(_) => {
                if key == KeyCode::Enter {
                    app.navigate(Route::Dashboard);
                }
            }
            Route::Account | Route::TeamMembers | Route::Help => {}
        }
    }

    fn handle_wizard(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('n') => {
                app.wizard_next();
                return;
            }
            KeyCode::Char('p') | KeyCode::Backspace => {
                app.wizard_previous();
                return;
            }
            _ => {}
        }

        match app.controller.wizard.step {
            WizardStep::Describe => match key {
                KeyCode::Char('e') | KeyCode::Enter => app.start_editing(Field::Description),
                KeyCode::Char(c @ '1'..='4') => {
                    app.choose_example_prompt(c as usize - '1' as usize);
                }
                _ => {}
            },
            WizardStep::SelectApps => match key {
                KeyCode::Up | KeyCode::Char('k') => app.app_cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => app.app_cursor_down(),
                KeyCode::Char(' ') | KeyCode::Enter => app.toggle_highlighted_app(),
                KeyCode::Char('a') => app.start_custom_app(),
                _ => {}
            },
            WizardStep::Configure => match key {
                KeyCode::Char('e') => app.start_editing(Field::AutomationName),
                KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                    app.configure_switch_column();
                }
                KeyCode::Up | KeyCode::Char('k') => app.configure_cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => app.configure_cursor_down(),
                KeyCode::Char(' ') | KeyCode::Enter => app.configure_select(),
                KeyCode::Char('r') => app.request_ranking(),
                _ => {}
            },
            WizardStep::Review => match key {
                KeyCode::Char('c') => app.copy_blueprint(),
                KeyCode::Char('d') => app.download_blueprint(),
                KeyCode::Char('s') => app.complete_automation(),
                _ => {}
            },
        }
    }

    fn handle_templates(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.template_up(),
            KeyCode::Down | KeyCode::Char('j') => app.template_down(),
            KeyCode::Char('/') => app.start_editing(Field::TemplateSearch),
            KeyCode::Char('c') => app.cycle_template_category(),
            KeyCode::Char('d') => app.cycle_template_difficulty(),
            KeyCode::Char('x') => app.clear_template_filters(),
            KeyCode::Enter => app.use_template(),
            _ => {}
        }
    }

    fn handle_settings(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.settings_up(),
            KeyCode::Down | KeyCode::Char('j') => app.settings_down(),
            KeyCode::Enter | KeyCode::Char(' ') => app.activate_setting(),
            KeyCode::Char('s') => app.save_settings(),
            _ => {}
        }
    }

    fn handle_text_input(app: &mut App, key: KeyCode, submit: fn(&mut App)) {
        match key {
            KeyCode::Enter => submit(app),
            KeyCode::Esc => app.cancel_editing(),
            KeyCode::Backspace => app.delete_char_before_cursor(),
            KeyCode::Delete => app.delete_char_at_cursor(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::tests::test_app;
    use crate::infrastructure::gemini::tests::FakeGenerator;

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    fn type_keys(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_only_in_normal_mode() {
        let mut app = test_app(FakeGenerator::failing());
        app.start_editing(Field::AutomationName);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input, "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_sidebar_opens_create() {
        let mut app = test_app(FakeGenerator::failing());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Create);
        assert_eq!(app.focus, Focus::Page);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Sidebar);
    }

    #[test]
    fn test_go_to_prompt() {
        let mut app = test_app(FakeGenerator::failing());
        press(&mut app, KeyCode::Char('g'));
        assert!(matches!(app.mode, AppMode::GoTo));
        type_keys(&mut app, "settings");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Settings);

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.input, "/settings");
        for _ in "settings".chars() {
            press(&mut app, KeyCode::Backspace);
        }
        assert_eq!(app.input, "/");
        type_keys(&mut app, "missing");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::NotFound("/missing".to_string()));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Dashboard);
    }

    #[test]
    fn test_describe_step_keys() {
        let mut app = test_app(FakeGenerator::failing());
        app.start_wizard(None);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.controller.wizard.step, WizardStep::Describe);
        assert!(app.status_message.is_some());

        press(&mut app, KeyCode::Char('2'));
        assert!(app.controller.wizard.description.starts_with("Every Monday"));

        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(app.mode, AppMode::Editing(Field::Description)));
        press(&mut app, KeyCode::End);
        type_keys(&mut app, "!");
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.wizard.description.ends_with("team!"));
    }

    #[test]
    fn test_select_apps_keys() {
        let mut app = test_app(FakeGenerator::failing());
        app.start_wizard(Some("Send a Slack message for every new email"));
        app.controller.wizard.step = WizardStep::SelectApps;

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.wizard.selected_apps, vec!["gmail", "slack"]);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.controller.wizard.step, WizardStep::Describe);
        assert_eq!(app.controller.wizard.selected_apps.len(), 2);
    }

    #[test]
    fn test_custom_app_form_keys() {
        let mut app = test_app(FakeGenerator::failing());
        app.start_wizard(None);
        app.controller.wizard.step = WizardStep::SelectApps;

        press(&mut app, KeyCode::Char('a'));
        type_keys(&mut app, "Notion");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode, AppMode::Editing(Field::CustomAppCategory)));
        type_keys(&mut app, "Docs");
        press(&mut app, KeyCode::Enter);
        type_keys(&mut app, "Team wiki");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, AppMode::Normal));
        let catalog = app.controller.wizard.catalog();
        assert_eq!(catalog.len(), 7);
        assert!(catalog[6].id.starts_with("notion-"));
        assert!(app.controller.wizard.is_selected(&catalog[6].id));
    }

    #[test]
    fn test_escape_abandons_custom_app() {
        let mut app = test_app(FakeGenerator::failing());
        app.start_wizard(None);
        app.controller.wizard.step = WizardStep::SelectApps;

        press(&mut app, KeyCode::Char('a'));
        type_keys(&mut app, "Notion");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(app.custom_app.name.is_empty());
        assert_eq!(app.controller.wizard.catalog().len(), 6);
    }

    #[test]
    fn test_configure_keys() {
        let mut app = test_app(FakeGenerator::failing());
        app.start_wizard(Some("Post new webhook payloads to Slack"));
        app.controller.wizard.toggle_app("slack");
        app.controller.wizard.toggle_app("webhook");
        app.controller.wizard.step = WizardStep::SelectApps;
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.controller.wizard.step, WizardStep::Configure);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.wizard.trigger.as_deref(), Some("webhook"));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.wizard.actions, vec!["slack"]);

        press(&mut app, KeyCode::Char('e'));
        type_keys(&mut app, "Hook alerts");
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.wizard.can_advance());
    }

    #[test]
    fn test_templates_keys() {
        let mut app = test_app(FakeGenerator::failing());
        app.navigate(Route::Templates);

        press(&mut app, KeyCode::Char('/'));
        type_keys(&mut app, "report");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.template_filter.query, "report");
        assert_eq!(app.visible_templates().len(), 1);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.visible_templates().len(), 6);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.template_filter.difficulty, "Beginner");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Create);
    }

    #[test]
    fn test_settings_keys() {
        let mut app = test_app(FakeGenerator::failing());
        app.navigate(Route::Settings);

        press(&mut app, KeyCode::Enter);
        type_keys(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.settings_draft.profile_name, "Ada");
        assert!(app.settings.profile_name.is_empty());

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.settings.profile_name, "Ada");
        assert_eq!(app.status_message.as_deref(), Some("Settings saved!"));
    }

    #[test]
    fn test_help_scrolling() {
        let mut app = test_app(FakeGenerator::failing());
        press(&mut app, KeyCode::F(1));
        assert!(matches!(app.mode, AppMode::Help));
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.help_scroll, 4);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.help_scroll, 0);
        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.mode, AppMode::Normal));
    }
}
