use crate::application::{nav_sections, App, AppMode, Field, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::pages;

/// Colors for the light and dark themes.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                bg: Color::Black,
                fg: Color::White,
                muted: Color::DarkGray,
                accent: Color::LightBlue,
                highlight_bg: Color::Blue,
                highlight_fg: Color::White,
                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
            }
        } else {
            Self {
                bg: Color::Reset,
                fg: Color::Reset,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight_bg: Color::LightBlue,
                highlight_fg: Color::Black,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            }
        }
    }

    pub fn highlight(&self) -> Style {
        Style::default().bg(self.highlight_bg).fg(self.highlight_fg)
    }

    pub fn block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(self.muted))
    }
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.settings.dark_mode);
    f.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[1]);

    render_header(f, app, &palette, chunks[0]);
    render_sidebar(f, app, &palette, body[0]);
    pages::render_page(f, app, &palette, body[1]);
    render_status_bar(f, app, &palette, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, &palette, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let profile = if app.settings.profile_name.trim().is_empty() {
        "Guest"
    } else {
        app.settings.profile_name.as_str()
    };
    let header = Paragraph::new(format!(
        "AutoFlow | {} | {} | {}",
        app.route.title(),
        app.route.path(),
        profile
    ))
    .style(Style::default().fg(palette.accent));
    f.render_widget(header, area);
}

fn render_sidebar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let mut lines = Vec::new();
    let mut index = 0;
    for section in nav_sections() {
        lines.push(Line::from(Span::styled(
            section.label,
            Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
        )));
        for route in section.routes {
            let mut style = Style::default();
            if route == app.route {
                style = style.fg(palette.accent).add_modifier(Modifier::BOLD);
            }
            if app.focus == Focus::Sidebar && index == app.sidebar_index {
                style = palette.highlight();
            }
            lines.push(Line::from(Span::styled(format!("  {}", route.title()), style)));
            index += 1;
        }
        lines.push(Line::default());
    }

    let title = if app.focus == Focus::Sidebar { "Menu *" } else { "Menu" };
    f.render_widget(Paragraph::new(lines).block(palette.block(title)), area);
}

fn render_status_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Tab: switch focus | g: go to path | F1/?: help | q: quit".to_string()
            }
        }
        AppMode::Editing(field) => {
            let shown = if field == Field::ApiKey { mask(&app.input) } else { app.input.clone() };
            format!("{}: {} (Enter to confirm, Esc to cancel)", field.label(), shown)
        }
        AppMode::GoTo => format!("Go to: {} (Enter to open, Esc to cancel)", app.input),
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let input = Paragraph::new(input_text)
        .block(palette.block("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Editing(_) => Style::default().fg(palette.success),
            AppMode::GoTo => Style::default().fg(palette.warning),
            AppMode::Help => Style::default().fg(palette.accent),
        });
    f.render_widget(input, area);
}

/// Hides all but the last four characters of a secret.
pub fn mask(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "•".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "•".repeat(count - 4), tail)
}

fn render_help_popup(f: &mut Frame, palette: &Palette, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("AutoFlow Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(palette.accent)),
    );

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"AUTOFLOW KEYBOARD REFERENCE

=== EVERYWHERE ===
Tab             Switch focus between the menu and the page
g               Go to a path (/create, /templates, /settings, ...)
F1 or ?         Show this help
q / Ctrl+C      Quit

=== MENU ===
↑↓ or j/k       Move through the menu
Enter           Open the highlighted page

=== PAGES ===
Esc             Return focus to the menu
Dashboard       n or Enter starts a new automation

=== CREATE AUTOMATION ===
n               Next step (only when the step is complete)
p / Backspace   Previous step, nothing is lost

Step 1  Describe
e / Enter       Edit the description (more than 10 characters)
1-4             Use one of the example prompts

Step 2  Select apps
↑↓ or j/k       Move through the apps
Space / Enter   Select or deselect the highlighted app (pick at least 2)
a               Add a custom app (name, category, description)

Step 3  Configure
e               Edit the automation name
←→ or h/l       Switch between triggers and actions
Space / Enter   Pick the trigger, or toggle an action
r               Rank triggers and actions with AI

Step 4  Review
c               Copy the blueprint to the clipboard
d               Download the blueprint as <name>.json
s               Save the automation and return to the dashboard

=== TEMPLATES ===
/               Search by name, description or tag
c               Cycle the category filter
d               Cycle the difficulty filter
x               Clear all filters
Enter           Start a new automation from the template

=== HISTORY ===
↑↓ or j/k       Move through saved automations
c               Copy the selected blueprint

=== SETTINGS ===
Enter / Space   Edit a field or flip a toggle
s               Save settings
                Dark mode is saved as soon as it is toggled.
                Without an API key in settings, GEMINI_API_KEY is used.

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_last_four() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("abc"), "•••");
        assert_eq!(mask("AIzaSyABCD1234"), "••••••••••1234");
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::for_theme(true).bg, Palette::for_theme(false).bg);
    }
}
