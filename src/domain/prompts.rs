//! Instruction strings sent to the generation service.

use super::models::AppDescriptor;

const EXPERT_PREAMBLE: &str = "You are an expert in workflow automation and make.com scenarios.";

pub fn rank_apps_prompt(description: &str, apps: &[AppDescriptor]) -> String {
    let app_list = apps
        .iter()
        .map(|app| format!("- {} ({}): {}", app.name, app.category, app.description))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{EXPERT_PREAMBLE}\n\
         Given the user's automation description and the following selected apps, rank the apps as possible triggers and actions for the workflow.\n\
         Output two JSON arrays: 'triggers' and 'actions', each sorted by decreasing probability.\n\
         Only output valid JSON.\n\n\
         User Request: {description}\n\
         Selected Apps:\n{app_list}"
    )
}

pub fn recommend_apps_prompt(request: &str) -> String {
    format!(
        "{EXPERT_PREAMBLE} Your job is to:\n\
         1. Understand the user's intent and what they want to automate.\n\
         2. Refer to the official make.com documentation and best practices.\n\
         3. Surf the internet (your knowledge base) to suggest the best apps, tools, and modules for the automation.\n\
         4. Output only a valid JSON array of recommended apps/tools, each with id, name, category, and description. Example:\n\
         [\n  \
         {{ \"id\": \"gmail\", \"name\": \"Gmail\", \"category\": \"Email\", \"description\": \"Send and receive emails\" }},\n  \
         {{ \"id\": \"slack\", \"name\": \"Slack\", \"category\": \"Communication\", \"description\": \"Team messaging and notifications\" }}\n\
         ]\n\
         Do not output anything except the JSON array.\n\
         User Request: {request}"
    )
}

pub fn blueprint_prompt(request: &str) -> String {
    format!(
        "{EXPERT_PREAMBLE} Your job is to:\n\
         1. Understand the user's intent and what they want to automate.\n\
         2. Refer to the official make.com documentation and best practices.\n\
         3. Surf the internet (your knowledge base) to suggest the best tools, apps, and modules for the automation.\n\
         4. Output only a valid make.com scenario JSON, with all required fields and structure, ready to be imported into make.com.\n\
         5. If you need to make assumptions, use common tools (e.g., Gmail, Google Sheets, HubSpot, etc.) and explain in comments inside the JSON.\n\
         6. Do not output anything except the JSON code block.\n\
         User Request: {request}"
    )
}

/// The user request embedded in a blueprint prompt once the wizard has
/// collected everything.
pub fn blueprint_request(name: &str, description: &str, trigger_name: &str, action_names: &[&str]) -> String {
    format!(
        "Automation Name: {}\nDescription: {}\nTrigger: {}\nActions: {}",
        name,
        description,
        trigger_name,
        action_names.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_request_layout() {
        let request = blueprint_request("Welcome flow", "Greet new leads", "Webhooks", &["Gmail", "HubSpot"]);
        assert_eq!(
            request,
            "Automation Name: Welcome flow\nDescription: Greet new leads\nTrigger: Webhooks\nActions: Gmail, HubSpot"
        );
    }

    #[test]
    fn test_rank_prompt_lists_every_app() {
        let apps = vec![
            AppDescriptor::new("gmail", "Gmail", "Email", "Send and receive emails"),
            AppDescriptor::new("slack", "Slack", "Communication", "Team messaging"),
        ];
        let prompt = rank_apps_prompt("notify the team", &apps);
        assert!(prompt.contains("User Request: notify the team"));
        assert!(prompt.contains("- Gmail (Email): Send and receive emails"));
        assert!(prompt.ends_with("- Slack (Communication): Team messaging"));
    }

    #[test]
    fn test_prompts_end_with_user_request() {
        assert!(recommend_apps_prompt("sync contacts").ends_with("User Request: sync contacts"));
        assert!(blueprint_prompt("sync contacts").ends_with("User Request: sync contacts"));
        assert!(recommend_apps_prompt("x").contains("{ \"id\": \"gmail\""));
    }
}
