use crate::models::Workspace;

use super::button::{Button, ButtonVariant};

/// Summary card for one workspace in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members: String,
    pub projects: String,
    pub link: String,
    pub actions: Vec<Button>,
}

impl WorkspaceCard {
    pub fn new(workspace: &Workspace) -> Self {
        let description = workspace
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description")
            .to_string();

        Self {
            id: workspace.id.clone(),
            name: workspace.name.clone(),
            description,
            members: format!("{} members", workspace.member_count),
            projects: format!("{} Projects", workspace.project_count),
            link: workspace_link(&workspace.id),
            actions: vec![
                Button::new("View"),
                Button::new("Edit").variant(ButtonVariant::Secondary),
                Button::new("Delete").variant(ButtonVariant::Danger),
            ],
        }
    }

    /// Plain-text rendering used by the console.
    pub fn render(&self) -> String {
        let actions: Vec<String> = self.actions.iter().map(|b| b.to_string()).collect();
        format!(
            "{} ({})\n  {}\n  {} · {}\n  {}  {}",
            self.name,
            self.id,
            self.description,
            self.projects,
            self.members,
            self.link,
            actions.join(" ")
        )
    }
}

pub fn workspace_link(workspace_id: &str) -> String {
    format!("/workspaces/{}", workspace_id)
}
