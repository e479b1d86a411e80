use super::spawn_server;
use taskboard_client::api::WorkspacesApi;
use taskboard_client::error::AppError;
use taskboard_client::models::WorkspaceForm;
use taskboard_client::pages::{DeleteOutcome, SubmitOutcome};
use taskboard_client::services::{HeadlessServices, NotificationLevel};

#[tokio::test]
async fn api_round_trip_against_server() {
    let (client, server) = spawn_server().await;

    let created = WorkspacesApi::create(&client.api, &WorkspaceForm::new("Acme", "Core"))
        .await
        .unwrap();
    assert_eq!(created.id, "w0");
    assert_eq!(created.member_count, 1);

    let updated = WorkspacesApi::update(&client.api, "w0", &WorkspaceForm::new("Acme HQ", ""))
        .await
        .unwrap();
    assert_eq!(updated.name, "Acme HQ");

    let listed = WorkspacesApi::list(&client.api).await.unwrap();
    assert_eq!(listed.len(), 1);

    let deleted = WorkspacesApi::delete(&client.api, "w0").await.unwrap();
    assert!(deleted.is_null());
    assert_eq!(server.count(), 0);
}

#[tokio::test]
async fn server_message_is_surfaced() {
    let (client, _server) = spawn_server().await;
    let err = WorkspacesApi::update(&client.api, "missing", &WorkspaceForm::new("Name", ""))
        .await
        .unwrap_err();
    match &err {
        AppError::Api { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "Workspace not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "Workspace not found");
}

#[tokio::test]
async fn page_create_duplicate_and_delete() {
    let (client, server) = spawn_server().await;
    server.seed(1);

    let services = HeadlessServices::new(true);
    let mut page = client.workspaces_page(services.context());
    page.load().await.unwrap();
    assert_eq!(page.workspaces().len(), 1);

    page.open_create_modal();
    page.set_name("ab");
    assert_eq!(page.submit().await, SubmitOutcome::Invalid);
    assert_eq!(server.request_count(), 1);

    page.set_name("Workspace 0");
    assert_eq!(
        page.submit().await,
        SubmitOutcome::Failed("Workspace name already exists".into())
    );
    assert!(page.session().is_open());

    page.set_name("abc");
    assert!(matches!(page.submit().await, SubmitOutcome::Created(_)));
    assert_eq!(page.workspaces().len(), 2);

    assert_eq!(page.delete("w0").await, DeleteOutcome::Deleted);
    assert_eq!(page.workspaces().len(), 1);

    assert_eq!(
        services.notifier.messages(NotificationLevel::Success),
        vec!["Workspace created successfully", "Workspace deleted successfully"]
    );
    assert_eq!(
        services.notifier.messages(NotificationLevel::Error),
        vec!["Workspace name already exists"]
    );
}

#[tokio::test]
async fn declined_delete_leaves_server_alone() {
    let (client, server) = spawn_server().await;
    server.seed(3);

    let services = HeadlessServices::new(false);
    let mut page = client.workspaces_page(services.context());
    page.load().await.unwrap();
    let before = server.request_count();

    assert_eq!(page.delete("w1").await, DeleteOutcome::Cancelled);
    assert_eq!(server.request_count(), before);
    assert_eq!(server.count(), 3);
    assert_eq!(page.workspaces().len(), 3);
}

#[tokio::test]
async fn deleting_last_item_pulls_page_back() {
    let (client, server) = spawn_server().await;
    server.seed(7);

    let services = HeadlessServices::new(true);
    let mut page = client.workspaces_page(services.context());
    page.load().await.unwrap();

    assert!(page.go_to_page(2));
    assert_eq!(page.visible_workspaces().len(), 1);
    assert_eq!(services.viewport.scroll_count(), 1);

    assert_eq!(page.delete("w6").await, DeleteOutcome::Deleted);
    assert_eq!(page.pagination().current_page(), 1);
    assert_eq!(page.visible_workspaces().len(), 6);
}
