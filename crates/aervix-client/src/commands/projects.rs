use aervix_shared::boards::{self, Board};
use aervix_shared::error::require;
use aervix_shared::types::{BoardId, TaskId, Timestamp};
use aervix_store::{BoardTask, ClubStore};
use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::insights::{insight_or_fallback, InsightProvider};
use crate::state::ClubSession;

/// Project submission form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub board_id: BoardId,
    pub task_name: String,
    #[serde(default)]
    pub code_used: String,
    #[serde(default)]
    pub reference_url: String,
    /// Encoded circuit photo, if any.
    #[serde(default)]
    pub circuit_design_image: Option<String>,
}

impl<S: ClubStore> ClubSession<S> {
    /// Log a project for the current user.
    pub fn submit_task(&self, form: NewTask) -> Result<BoardTask> {
        let owner = self.require_user()?;
        boards::require(&form.board_id)?;
        require("taskName", &form.task_name)?;

        let task = BoardTask {
            id: TaskId::new(),
            user_id: owner.id.clone(),
            user_name: owner.name.clone(),
            user_profile: owner.profile_image.clone(),
            board_id: form.board_id,
            task_name: form.task_name,
            code_used: form.code_used,
            circuit_design_image: form.circuit_design_image.filter(|img| !img.is_empty()),
            reference_url: form.reference_url,
            timestamp: Timestamp::now(),
            comments: Vec::new(),
        };
        self.store().append_task(&owner.id, task.clone())?;

        info!(task_id = %task.id, board = %task.board_id, owner = %owner.id, "task submitted");
        Ok(task)
    }

    /// The current user's projects in submission order.
    pub fn my_tasks(&self) -> Result<Vec<BoardTask>> {
        let owner = self.require_user()?;
        Ok(self.store().list_tasks_for_owner(&owner.id))
    }

    /// Catalogue entry plus tips for the board detail view.
    pub fn board_details<P: InsightProvider + ?Sized>(
        &self,
        board_id: &BoardId,
        provider: &P,
    ) -> Result<(&'static Board, String)> {
        let board = boards::require(board_id)?;
        Ok((board, insight_or_fallback(provider, board.name)))
    }
}

#[cfg(test)]
mod tests {
    use aervix_shared::constants::FALLBACK_INSIGHT;
    use aervix_shared::error::ValidationError;

    use super::*;
    use crate::error::ClientError;
    use crate::insights::InsightError;
    use crate::state::test_support::{blink, logged_in, session};

    struct Offline;

    impl InsightProvider for Offline {
        fn generate(&self, _prompt: &str) -> std::result::Result<String, InsightError> {
            Err(InsightError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn submit_requires_login() {
        let s = session();
        assert!(matches!(s.submit_task(blink("uno")), Err(ClientError::NotLoggedIn)));
    }

    #[test]
    fn submit_stamps_owner_and_persists() {
        let mut s = session();
        let ada = logged_in(&mut s, "Ada");

        let task = s.submit_task(blink("uno")).unwrap();

        assert_eq!(task.user_id, ada.id);
        assert_eq!(task.user_name, "Ada");
        assert!(task.comments.is_empty());
        assert_eq!(s.my_tasks().unwrap(), vec![task]);
    }

    #[test]
    fn unknown_board_is_rejected() {
        let mut s = session();
        logged_in(&mut s, "Ada");
        assert!(matches!(
            s.submit_task(blink("esp32")),
            Err(ClientError::Validation(ValidationError::UnknownBoard(_)))
        ));
        assert!(s.my_tasks().unwrap().is_empty());
    }

    #[test]
    fn blank_task_name_is_rejected() {
        let mut s = session();
        logged_in(&mut s, "Ada");
        let mut form = blink("nano");
        form.task_name = " ".into();
        assert!(s.submit_task(form).is_err());
    }

    #[test]
    fn board_details_fall_back_when_offline() {
        let s = session();
        let (board, tips) = s.board_details(&BoardId::from("leonardo"), &Offline).unwrap();
        assert_eq!(board.name, "Arduino Leonardo");
        assert_eq!(tips, FALLBACK_INSIGHT);
    }
}
