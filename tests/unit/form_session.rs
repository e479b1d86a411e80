use taskboard_client::models::WorkspaceForm;
use taskboard_client::pages::{FormMode, FormSession, SubmitBlocked};

#[test]
fn create_then_edit_share_one_session() {
    let mut session = FormSession::<WorkspaceForm>::new();
    assert!(!session.is_open());

    session.open_create();
    session.form_mut().name = "x".into();
    assert_eq!(session.begin_submit(), Err(SubmitBlocked::Invalid));
    assert!(session.errors().get("name").is_some());

    session.cancel();
    session.open_edit("w7", WorkspaceForm::new("Platform", ""));
    assert!(session.errors().is_empty());
    assert_eq!(session.mode(), Some(&FormMode::Edit { id: "w7".into() }));
    assert_eq!(session.begin_submit(), Ok(FormMode::Edit { id: "w7".into() }));
    assert!(session.is_submitting());
    assert_eq!(session.begin_submit(), Err(SubmitBlocked::InFlight));

    session.finish_success();
    assert!(!session.is_open());
    assert!(!session.is_submitting());
}
