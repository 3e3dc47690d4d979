use aervix_store::{BoardTask, ClubStore, User};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::state::ClubSession;

/// Progress report handed to the document exporter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: String,
    pub department: String,
    pub tasks: Vec<BoardTask>,
}

impl Portfolio {
    /// Suggested file stem for the exported document.
    pub fn file_stem(&self) -> String {
        format!("AERVIX_{}", self.name)
    }

    /// Plain-text rendering of the report.
    pub fn render_text(&self) -> String {
        let mut lines = vec![
            "AERVIX ELECTRONICS CLUB".to_string(),
            format!("Progress Report: {}", self.name),
            format!("Department: {}", self.department),
        ];

        for (index, task) in self.tasks.iter().enumerate() {
            let date = task
                .timestamp
                .to_datetime()
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            lines.push(String::new());
            lines.push(format!("{}. {}", index + 1, task.task_name));
            lines.push(format!("Board: {} | {}", task.board_id, date));
            lines.extend(task.code_used.lines().map(|line| format!("    {line}")));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl<S: ClubStore> ClubSession<S> {
    /// Replace the current user's profile image.
    ///
    /// Tasks, comments and messages keep the image copied at creation time.
    pub fn update_profile_image(&mut self, image: Option<String>) -> Result<User> {
        let mut user = self.require_user()?.clone();
        user.profile_image = image.filter(|img| !img.is_empty());

        self.store().upsert_user(user.clone())?;
        info!(user_id = %user.id, has_image = user.profile_image.is_some(), "profile image updated");

        self.set_current_user(Some(user.clone()));
        Ok(user)
    }

    /// The current user's report data.
    pub fn portfolio(&self) -> Result<Portfolio> {
        let me = self.require_user()?;
        Ok(Portfolio {
            name: me.name.clone(),
            department: me.department.clone(),
            tasks: self.store().list_tasks_for_owner(&me.id),
        })
    }

    /// Other members whose name or department contains `query`, ignoring case.
    pub fn search_people(&self, query: &str) -> Vec<User> {
        let needle = query.to_lowercase();
        let me = self.current_user().map(|u| u.id.clone());

        self.store()
            .list_users()
            .into_iter()
            .filter(|u| Some(&u.id) != me.as_ref())
            .filter(|u| {
                u.name.to_lowercase().contains(&needle)
                    || u.department.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::state::test_support::{blink, form, logged_in, session};

    #[test]
    fn image_update_is_persisted_in_place() {
        let mut s = session();
        logged_in(&mut s, "Bob");
        let ada = logged_in(&mut s, "Ada");

        let updated = s
            .update_profile_image(Some("data:image/png;base64,AAAA".into()))
            .unwrap();

        let users = s.store().list_users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].id, ada.id);
        assert_eq!(users[1].profile_image, updated.profile_image);
        assert_eq!(s.current_user().unwrap().profile_image, updated.profile_image);
    }

    #[test]
    fn image_update_requires_login() {
        let mut s = session();
        assert!(matches!(s.update_profile_image(None), Err(ClientError::NotLoggedIn)));
    }

    #[test]
    fn portfolio_lists_own_tasks() {
        let mut s = session();
        logged_in(&mut s, "Bob");
        s.submit_task(blink("nano")).unwrap();
        logged_in(&mut s, "Ada");
        s.submit_task(blink("uno")).unwrap();

        let report = s.portfolio().unwrap();
        assert_eq!(report.name, "Ada");
        assert_eq!(report.tasks.len(), 1);
        assert_eq!(report.file_stem(), "AERVIX_Ada");

        let text = report.render_text();
        assert!(text.contains("Progress Report: Ada"));
        assert!(text.contains("Department: Electronics"));
        assert!(text.contains("1. Blink"));
        assert!(text.contains("Board: uno | "));
        assert!(text.contains("    digitalWrite(13, HIGH);"));
    }

    #[test]
    fn empty_report_has_header_only() {
        let report = Portfolio {
            name: "Ada".into(),
            department: "Electronics".into(),
            tasks: Vec::new(),
        };
        assert_eq!(
            report.render_text(),
            "AERVIX ELECTRONICS CLUB\nProgress Report: Ada\nDepartment: Electronics\n"
        );
    }

    #[test]
    fn search_matches_name_or_department() {
        let mut s = session();
        let mut mech = form("Carla");
        mech.department = "Mechanical".into();
        s.register(mech).unwrap();
        s.register(form("Bob")).unwrap();
        logged_in(&mut s, "Ada");

        let names = |q: &str| -> Vec<String> {
            s.search_people(q).into_iter().map(|u| u.name).collect()
        };
        assert_eq!(names("mech"), vec!["Carla"]);
        assert_eq!(names("BOB"), vec!["Bob"]);
        assert_eq!(names("electronics"), vec!["Bob"]);
        assert_eq!(names(""), vec!["Carla", "Bob"]);
    }
}
