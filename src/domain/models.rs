use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A service that can take part in an automation, either as the trigger or
/// as one of the actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl AppDescriptor {
    pub fn new(id: &str, name: &str, category: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Builds a descriptor from whatever shape the model put in a list.
    ///
    /// Objects need at least a `name` or an `id`; a missing id is derived
    /// from the name. Bare strings are taken as the app name. Every other
    /// JSON value is rejected.
    pub fn from_loose(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(Self::new(&slugify(name), name, "", ""))
            }
            Value::Object(map) => {
                let field = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .map(|s| s.trim().to_string())
                        .unwrap_or_default()
                };
                let mut name = field("name");
                let mut id = field("id");
                if name.is_empty() && id.is_empty() {
                    return None;
                }
                if id.is_empty() {
                    id = slugify(&name);
                }
                if name.is_empty() {
                    name = id.clone();
                }
                let icon = map.get("icon").and_then(Value::as_str).map(str::to_string);
                Some(Self {
                    id,
                    name,
                    category: field("category"),
                    description: field("description"),
                    icon,
                })
            }
            _ => None,
        }
    }
}

/// Lowercases `name` and joins its whitespace-separated words with hyphens.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Trigger and action candidates as ranked by the generation service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedApps {
    pub triggers: Vec<AppDescriptor>,
    pub actions: Vec<AppDescriptor>,
}

impl RankedApps {
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty() && self.actions.is_empty()
    }
}

/// A finished automation as kept in the local store.
///
/// Records are only ever appended; the field names are part of the stored
/// format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAutomation {
    pub name: String,
    pub description: String,
    pub trigger: String,
    pub actions: Vec<String>,
    pub blueprint: String,
    pub created: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// A pre-built automation idea shown on the templates page.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub estimated_time: &'static str,
    pub usage_count: u32,
    pub rating: f32,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationStatus {
    Active,
    Paused,
    Draft,
}

impl AutomationStatus {
    pub fn label(self) -> &'static str {
        match self {
            AutomationStatus::Active => "active",
            AutomationStatus::Paused => "paused",
            AutomationStatus::Draft => "draft",
        }
    }
}

/// Demo row for the dashboard's recent automations panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoAutomation {
    pub name: &'static str,
    pub status: AutomationStatus,
    pub last_run: &'static str,
    pub runs: u32,
    pub template: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub trend_percent: i32,
}
