//! Static catalogs shown when nothing better is available.
//!
//! The demo apps double as the fallback catalog for the creation wizard
//! whenever the generation service cannot recommend anything.

use super::models::{
    slugify, AppDescriptor, AutomationStatus, DemoAutomation, Difficulty, StatCard, Template,
};

pub const ALL_FILTER: &str = "All";

pub const TEMPLATE_CATEGORIES: [&str; 7] = [
    ALL_FILTER,
    "Marketing",
    "Reporting",
    "Social Media",
    "Customer Support",
    "Finance",
    "Content",
];

pub const DIFFICULTY_FILTERS: [&str; 4] = [ALL_FILTER, "Beginner", "Intermediate", "Advanced"];

/// The six built-in apps offered before any recommendation has arrived.
pub fn demo_apps() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor::new("gmail", "Gmail", "Email", "Send and receive emails").with_icon("✉"),
        AppDescriptor::new("slack", "Slack", "Communication", "Team messaging and notifications")
            .with_icon("#"),
        AppDescriptor::new("google-sheets", "Google Sheets", "Spreadsheets", "Manage and analyze data")
            .with_icon("▦"),
        AppDescriptor::new("calendar", "Google Calendar", "Scheduling", "Schedule events and meetings")
            .with_icon("◷"),
        AppDescriptor::new("webhook", "Webhooks", "Integration", "HTTP requests and API calls")
            .with_icon("⇄"),
        AppDescriptor::new("hubspot", "HubSpot", "CRM", "Customer relationship management")
            .with_icon("☺"),
    ]
}

pub fn example_prompts() -> [&'static str; 4] {
    [
        "When a new lead fills out our contact form, send them a welcome email and add them to our CRM",
        "Every Monday, generate a weekly sales report and send it to the team",
        "When someone mentions our brand on social media, notify our marketing team",
        "Automatically follow up with customers 3 days after their purchase",
    ]
}

/// Builds a user-defined app. Returns `None` unless all three fields have
/// content after trimming.
pub fn custom_app(name: &str, category: &str, description: &str, suffix: &str) -> Option<AppDescriptor> {
    let (name, category, description) = (name.trim(), category.trim(), description.trim());
    if name.is_empty() || category.is_empty() || description.is_empty() {
        return None;
    }
    let id = format!("{}-{}", slugify(name), suffix);
    Some(AppDescriptor::new(&id, name, category, description))
}

pub fn templates() -> Vec<Template> {
    vec![
        Template {
            id: "1",
            name: "Lead Nurturing Sequence",
            description: "Automatically nurture new leads with a series of personalized emails based on their interests and behavior.",
            category: "Marketing",
            difficulty: Difficulty::Beginner,
            estimated_time: "10 min",
            usage_count: 2847,
            rating: 4.8,
            tags: &["Email", "CRM", "Lead Generation"],
        },
        Template {
            id: "2",
            name: "Weekly Sales Report Generator",
            description: "Compile sales data from multiple sources and automatically generate and distribute weekly performance reports.",
            category: "Reporting",
            difficulty: Difficulty::Intermediate,
            estimated_time: "15 min",
            usage_count: 1532,
            rating: 4.6,
            tags: &["Sales", "Reports", "Analytics"],
        },
        Template {
            id: "3",
            name: "Social Media Brand Monitoring",
            description: "Monitor mentions of your brand across social platforms and automatically notify your team of important conversations.",
            category: "Social Media",
            difficulty: Difficulty::Intermediate,
            estimated_time: "20 min",
            usage_count: 943,
            rating: 4.7,
            tags: &["Social Media", "Monitoring", "Notifications"],
        },
        Template {
            id: "4",
            name: "Customer Support Ticket Routing",
            description: "Automatically categorize and route support tickets to the right team members based on urgency and topic.",
            category: "Customer Support",
            difficulty: Difficulty::Advanced,
            estimated_time: "25 min",
            usage_count: 756,
            rating: 4.9,
            tags: &["Support", "Ticketing", "Automation"],
        },
        Template {
            id: "5",
            name: "Invoice Follow-up Automation",
            description: "Automatically send payment reminders and follow-ups for overdue invoices to improve cash flow.",
            category: "Finance",
            difficulty: Difficulty::Beginner,
            estimated_time: "8 min",
            usage_count: 1284,
            rating: 4.5,
            tags: &["Finance", "Invoicing", "Payments"],
        },
        Template {
            id: "6",
            name: "Content Publishing Workflow",
            description: "Streamline your content creation process from drafting to publishing across multiple channels.",
            category: "Content",
            difficulty: Difficulty::Intermediate,
            estimated_time: "18 min",
            usage_count: 623,
            rating: 4.4,
            tags: &["Content", "Publishing", "Workflow"],
        },
    ]
}

/// Search and dropdown filters of the templates page.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateFilter {
    pub query: String,
    pub category: String,
    pub difficulty: String,
}

impl Default for TemplateFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_FILTER.to_string(),
            difficulty: ALL_FILTER.to_string(),
        }
    }
}

impl TemplateFilter {
    pub fn matches(&self, template: &Template) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = template.name.to_lowercase().contains(&query)
            || template.description.to_lowercase().contains(&query)
            || template.tags.iter().any(|tag| tag.to_lowercase().contains(&query));
        let matches_category = self.category == ALL_FILTER || template.category == self.category;
        let matches_difficulty =
            self.difficulty == ALL_FILTER || template.difficulty.label() == self.difficulty;

        matches_search && matches_category && matches_difficulty
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

pub fn filter_templates<'a>(templates: &'a [Template], filter: &TemplateFilter) -> Vec<&'a Template> {
    templates.iter().filter(|t| filter.matches(t)).collect()
}

pub fn dashboard_stats() -> [StatCard; 4] {
    [
        StatCard { title: "Active Automations", value: "12", description: "Running workflows", trend_percent: 20 },
        StatCard { title: "Total Runs", value: "1,247", description: "This month", trend_percent: 15 },
        StatCard { title: "Time Saved", value: "124h", description: "Estimated monthly", trend_percent: 8 },
        StatCard { title: "Team Members", value: "8", description: "Active collaborators", trend_percent: 0 },
    ]
}

pub fn recent_automations() -> [DemoAutomation; 4] {
    [
        DemoAutomation {
            name: "Lead Scoring & Nurturing",
            status: AutomationStatus::Active,
            last_run: "2 hours ago",
            runs: 145,
            template: "Marketing",
        },
        DemoAutomation {
            name: "Weekly Report Generator",
            status: AutomationStatus::Active,
            last_run: "1 day ago",
            runs: 28,
            template: "Reporting",
        },
        DemoAutomation {
            name: "Social Media Scheduler",
            status: AutomationStatus::Paused,
            last_run: "3 days ago",
            runs: 67,
            template: "Social",
        },
        DemoAutomation {
            name: "Customer Onboarding Flow",
            status: AutomationStatus::Draft,
            last_run: "Never",
            runs: 0,
            template: "Customer Success",
        },
    ]
}
