//! Page bodies, one renderer per route.

use crate::application::{App, ConfigureColumn, Focus, Route, SettingsField};
use crate::domain::catalog::{dashboard_stats, example_prompts, recent_automations};
use crate::domain::{AppDescriptor, AutomationStatus, Blueprint, WizardStep, MIN_SELECTED_APPS, TOTAL_STEPS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::ui::{mask, Palette};

pub fn render_page(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    match &app.route {
        Route::Dashboard => render_dashboard(f, app, palette, area),
        Route::Create => render_wizard(f, app, palette, area),
        Route::Templates => render_templates(f, app, palette, area),
        Route::History => render_history(f, app, palette, area),
        Route::Settings => render_settings(f, app, palette, area),
        Route::Account => render_placeholder(f, palette, area, "Account", "Manage your profile and subscription."),
        Route::TeamMembers => {
            render_placeholder(f, palette, area, "Team Members", "Invite collaborators and manage their roles.")
        }
        Route::Help => render_placeholder(
            f,
            palette,
            area,
            "Help",
            "Guides and support are on their way. Press ? for keyboard shortcuts.",
        ),
        Route::NotFound(path) => render_not_found(f, palette, area, path),
    }
}

fn selected_style(app: &App, palette: &Palette, highlighted: bool) -> Style {
    if highlighted && app.focus == Focus::Page {
        palette.highlight()
    } else {
        Style::default()
    }
}

fn render_dashboard(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let greeting = match app.settings.profile_name.trim() {
        "" => "Welcome back!".to_string(),
        name => format!("Welcome back, {}!", name),
    };
    let intro = Paragraph::new(vec![
        Line::from(Span::styled(greeting, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            "Press n to create a new automation.",
            Style::default().fg(palette.muted),
        )),
    ]);
    f.render_widget(intro, chunks[0]);

    let stats = dashboard_stats();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[1]);
    for (card, area) in stats.iter().zip(cards.iter()) {
        let trend = if card.trend_percent > 0 {
            Span::styled(format!("+{}% from last month", card.trend_percent), Style::default().fg(palette.success))
        } else {
            Span::styled("No change", Style::default().fg(palette.muted))
        };
        let body = Paragraph::new(vec![
            Line::from(Span::styled(card.value, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(card.description, Style::default().fg(palette.muted))),
            Line::from(trend),
        ]);
        f.render_widget(body.block(palette.block(card.title)), *area);
    }

    let rows = recent_automations().into_iter().map(|automation| {
        let status_color = match automation.status {
            AutomationStatus::Active => palette.success,
            AutomationStatus::Paused => palette.warning,
            AutomationStatus::Draft => palette.muted,
        };
        Row::new(vec![
            Cell::from(automation.name),
            Cell::from(automation.status.label()).style(Style::default().fg(status_color)),
            Cell::from(automation.last_run),
            Cell::from(automation.runs.to_string()),
            Cell::from(automation.template),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(12),
            Constraint::Percentage(18),
            Constraint::Percentage(10),
            Constraint::Percentage(26),
        ],
    )
    .header(Row::new(vec!["Name", "Status", "Last run", "Runs", "Template"]).style(Style::default().fg(palette.accent)))
    .block(palette.block("Recent Automations"));
    f.render_widget(table, chunks[2]);
}

fn render_wizard(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let wizard = &app.controller.wizard;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let steps: Vec<Span> = WizardStep::ALL
        .iter()
        .map(|step| {
            let style = if *step == wizard.step {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else if step.number() < wizard.step.number() {
                Style::default().fg(palette.success)
            } else {
                Style::default().fg(palette.muted)
            };
            Span::styled(format!(" {}. {} ", step.number(), step.label()), style)
        })
        .collect();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted))
                .title(Line::from(steps)),
        )
        .gauge_style(Style::default().fg(palette.accent))
        .percent(wizard.progress_percent() as u16)
        .label(format!("{}%", wizard.progress_percent()));
    f.render_widget(gauge, chunks[0]);

    match wizard.step {
        WizardStep::Describe => render_describe(f, app, palette, chunks[1]),
        WizardStep::SelectApps => render_select_apps(f, app, palette, chunks[1]),
        WizardStep::Configure => render_configure(f, app, palette, chunks[1]),
        WizardStep::Review => render_review(f, app, palette, chunks[1]),
    }

    let footer = format!(
        "Step {} of {} | n: next{} | p: previous",
        wizard.step.number(),
        TOTAL_STEPS,
        if wizard.can_advance() { "" } else { " (incomplete)" }
    );
    f.render_widget(Paragraph::new(footer).style(Style::default().fg(palette.muted)), chunks[2]);
}

fn render_describe(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let wizard = &app.controller.wizard;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(7)])
        .split(area);

    let description = if wizard.description.is_empty() {
        Paragraph::new(Span::styled(
            "Describe what you want to automate in plain language. Press e to start typing.",
            Style::default().fg(palette.muted),
        ))
    } else {
        Paragraph::new(wizard.description.as_str())
    };
    f.render_widget(
        description
            .wrap(Wrap { trim: true })
            .block(palette.block("What do you want to automate?")),
        chunks[0],
    );

    let examples: Vec<Line> = example_prompts()
        .iter()
        .enumerate()
        .map(|(i, prompt)| Line::from(format!("{}. {}", i + 1, prompt)))
        .collect();
    f.render_widget(
        Paragraph::new(examples)
            .wrap(Wrap { trim: true })
            .block(palette.block("Examples (press 1-4)")),
        chunks[1],
    );
}

fn status_lines<'a>(
    palette: &Palette,
    loading: bool,
    loading_text: &'a str,
    error: Option<&'a str>,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if loading {
        lines.push(Line::from(Span::styled(loading_text, Style::default().fg(palette.warning))));
    }
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(error, Style::default().fg(palette.error))));
    }
    lines
}

fn app_line(descriptor: &AppDescriptor, marker: &str, style: Style) -> Line<'static> {
    let icon = descriptor.icon.as_deref().unwrap_or("•");
    Line::from(Span::styled(
        format!(
            "{} {} {} ({}) - {}",
            marker, icon, descriptor.name, descriptor.category, descriptor.description
        ),
        style,
    ))
}

fn render_select_apps(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let controller = &app.controller;
    let wizard = &controller.wizard;
    let catalog = wizard.catalog();

    let mut lines = status_lines(
        palette,
        controller.loading_apps,
        "Finding the best apps for your automation...",
        controller.apps_error.as_deref(),
    );
    if catalog.is_empty() && !controller.loading_apps {
        lines.push(Line::from(Span::styled(
            "No apps were suggested. Press a to add a custom app.",
            Style::default().fg(palette.warning),
        )));
    }
    for (i, descriptor) in catalog.iter().enumerate() {
        let marker = if wizard.is_selected(&descriptor.id) { "[x]" } else { "[ ]" };
        lines.push(app_line(descriptor, marker, selected_style(app, palette, i == app.app_cursor)));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(
            "{} selected, at least {} needed | Space: toggle | a: add custom app",
            wizard.selected_apps.len(),
            MIN_SELECTED_APPS
        ),
        Style::default().fg(palette.muted),
    )));

    let scroll = app.app_cursor.saturating_sub(area.height.saturating_sub(6) as usize) as u16;
    f.render_widget(
        Paragraph::new(lines).scroll((scroll, 0)).block(palette.block("Select Apps")),
        area,
    );
}

fn render_configure(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let controller = &app.controller;
    let wizard = &controller.wizard;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let name = if wizard.name.is_empty() {
        Span::styled("Press e to name your automation", Style::default().fg(palette.muted))
    } else {
        Span::raw(wizard.name.as_str())
    };
    f.render_widget(Paragraph::new(Line::from(name)).block(palette.block("Automation Name")), chunks[0]);

    let mut status = status_lines(
        palette,
        controller.loading_ranking,
        "Ranking triggers and actions...",
        controller.ranking_error.as_deref(),
    );
    if status.is_empty() {
        status.push(Line::from(Span::styled(
            "r: rank with AI | ←→: switch list | Space: choose",
            Style::default().fg(palette.muted),
        )));
    }
    f.render_widget(Paragraph::new(status), chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let triggers: Vec<Line> = wizard
        .trigger_options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if wizard.trigger.as_deref() == Some(option.id.as_str()) { "(•)" } else { "( )" };
            let highlighted = app.configure_column == ConfigureColumn::Triggers && i == app.trigger_cursor;
            app_line(option, marker, selected_style(app, palette, highlighted))
        })
        .collect();
    f.render_widget(
        Paragraph::new(triggers).wrap(Wrap { trim: true }).block(palette.block("Trigger")),
        columns[0],
    );

    let actions: Vec<Line> = wizard
        .action_options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if wizard.is_action(&option.id) { "[x]" } else { "[ ]" };
            let highlighted = app.configure_column == ConfigureColumn::Actions && i == app.action_cursor;
            app_line(option, marker, selected_style(app, palette, highlighted))
        })
        .collect();
    f.render_widget(
        Paragraph::new(actions).wrap(Wrap { trim: true }).block(palette.block("Actions")),
        columns[1],
    );
}

fn render_review(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let controller = &app.controller;
    let wizard = &controller.wizard;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let label = Style::default().fg(palette.muted);
    let summary = vec![
        Line::from(vec![Span::styled("Name: ", label), Span::raw(wizard.name.as_str())]),
        Line::from(vec![Span::styled("Description: ", label), Span::raw(wizard.description.as_str())]),
        Line::from(vec![
            Span::styled("Trigger: ", label),
            Span::raw(wizard.trigger_name().unwrap_or_default()),
        ]),
        Line::from(vec![Span::styled("Actions: ", label), Span::raw(wizard.action_names().join(", "))]),
        Line::from(Span::styled("c: copy | d: download | s: save automation", label)),
    ];
    f.render_widget(
        Paragraph::new(summary).wrap(Wrap { trim: true }).block(palette.block("Summary")),
        chunks[0],
    );

    let mut lines = status_lines(
        palette,
        controller.loading_blueprint,
        "Generating your automation blueprint...",
        controller.blueprint_error.as_deref(),
    );
    let title = match &wizard.blueprint {
        Blueprint::Document(_) => "Blueprint (JSON)",
        Blueprint::Raw(_) => "Blueprint (text)",
        Blueprint::Empty => "Blueprint",
    };
    lines.extend(wizard.blueprint.text().lines().map(Line::from));
    f.render_widget(Paragraph::new(lines).block(palette.block(title)), chunks[1]);
}

fn render_templates(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let filter = &app.template_filter;
    let query = if filter.query.is_empty() { "(none)" } else { filter.query.as_str() };
    let filters = Paragraph::new(format!(
        "Search: {} | Category: {} | Difficulty: {} | /: search c: category d: difficulty x: clear",
        query, filter.category, filter.difficulty
    ))
    .block(palette.block("Filters"));
    f.render_widget(filters, chunks[0]);

    let templates = app.visible_templates();
    if templates.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from("No templates match your filters."),
            Line::from(Span::styled("Press x to clear all filters.", Style::default().fg(palette.muted))),
        ])
        .block(palette.block("Templates"));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let rows = templates.iter().enumerate().map(|(i, template)| {
        Row::new(vec![
            Cell::from(template.name),
            Cell::from(template.category),
            Cell::from(template.difficulty.label()),
            Cell::from(template.estimated_time),
            Cell::from(format!("{} uses", template.usage_count)),
            Cell::from(format!("★ {:.1}", template.rating)),
            Cell::from(template.tags.join(", ")),
        ])
        .style(selected_style(app, palette, i == app.template_cursor))
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(26),
            Constraint::Percentage(14),
            Constraint::Percentage(12),
            Constraint::Percentage(8),
            Constraint::Percentage(10),
            Constraint::Percentage(6),
            Constraint::Percentage(24),
        ],
    )
    .header(
        Row::new(vec!["Name", "Category", "Difficulty", "Time", "Used", "Rating", "Tags"])
            .style(Style::default().fg(palette.accent)),
    )
    .block(palette.block("Templates (Enter: use template)"));

    let detail_height = 4;
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(detail_height)])
        .split(chunks[1]);
    f.render_widget(table, parts[0]);

    if let Some(template) = templates.get(app.template_cursor) {
        f.render_widget(
            Paragraph::new(template.description)
                .wrap(Wrap { trim: true })
                .block(palette.block(template.name)),
            parts[1],
        );
    }
}

fn render_history(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let saved = app.saved_automations();
    if saved.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from("No automations saved yet."),
            Line::from(Span::styled(
                "Finish the Create Automation wizard to see it here.",
                Style::default().fg(palette.muted),
            )),
        ])
        .block(palette.block("History"));
        f.render_widget(empty, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let lines: Vec<Line> = saved
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let created = record.created.split('T').next().unwrap_or_default();
            Line::from(Span::styled(
                format!("{}  {}", created, record.name),
                selected_style(app, palette, i == app.history_cursor),
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(palette.block("Saved Automations")), columns[0]);

    if let Some(record) = saved.get(app.history_cursor) {
        let label = Style::default().fg(palette.muted);
        let mut detail = vec![
            Line::from(vec![Span::styled("Description: ", label), Span::raw(record.description.clone())]),
            Line::from(vec![Span::styled("Trigger: ", label), Span::raw(record.trigger.clone())]),
            Line::from(vec![Span::styled("Actions: ", label), Span::raw(record.actions.join(", "))]),
            Line::from(Span::styled("c: copy blueprint", label)),
            Line::default(),
        ];
        detail.extend(record.blueprint.lines().map(|line| Line::from(line.to_string())));
        f.render_widget(Paragraph::new(detail).block(palette.block("Blueprint")), columns[1]);
    }
}

fn render_settings(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let draft = &app.settings_draft;
    let on_off = |value: bool| if value { "On" } else { "Off" };

    let mut lines: Vec<Line> = SettingsField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let value = match field {
                SettingsField::ProfileName => draft.profile_name.clone(),
                SettingsField::ApiKey if draft.api_key.is_empty() => "(not set)".to_string(),
                SettingsField::ApiKey => mask(&draft.api_key),
                SettingsField::DarkMode => on_off(draft.dark_mode).to_string(),
                SettingsField::Language => draft.language_label().to_string(),
                SettingsField::Notifications => on_off(draft.notifications).to_string(),
            };
            Line::from(Span::styled(
                format!("{:<22}{}", field.label(), value),
                selected_style(app, palette, i == app.settings_cursor),
            ))
        })
        .collect();

    lines.push(Line::default());
    let unsaved = app.settings_draft != app.settings;
    lines.push(Line::from(Span::styled(
        if unsaved { "Unsaved changes. Press s to save." } else { "Enter: edit | s: save" },
        Style::default().fg(if unsaved { palette.warning } else { palette.muted }),
    )));

    f.render_widget(Paragraph::new(lines).block(palette.block("Settings")), area);
}

fn render_placeholder(f: &mut Frame, palette: &Palette, area: Rect, title: &str, body: &str) {
    let text = vec![
        Line::from(Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD))),
        Line::default(),
        Line::from(Span::styled(body.to_string(), Style::default().fg(palette.muted))),
    ];
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }).block(palette.block(title)), area);
}

fn render_not_found(f: &mut Frame, palette: &Palette, area: Rect, path: &str) {
    let text = vec![
        Line::from(Span::styled("404", Style::default().fg(palette.error).add_modifier(Modifier::BOLD))),
        Line::from(format!("Oops! Page not found: {}", path)),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to return home, or g to go somewhere else.",
            Style::default().fg(palette.muted),
        )),
    ];
    f.render_widget(Paragraph::new(text).block(palette.block("Not Found")), area);
}
