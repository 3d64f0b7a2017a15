//! End-to-end integration tests for the registration flow.

mod common;

use common::{mock_registry_server, test_registry_client};
use registration::{Bootcamp, NoopNavigator, RegistrationController, SubmitError};
use submission_store::{FileFlagStore, FlagStore};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn open_controller(
    mock_server: &MockServer,
    store: FileFlagStore,
) -> RegistrationController {
    RegistrationController::open(
        test_registry_client(mock_server),
        Box::new(store),
        Box::new(NoopNavigator),
    )
    .await
    .unwrap()
}

fn fill_valid(controller: &mut RegistrationController) {
    controller.set_full_name("Jane Doe");
    controller.set_discord_user("janed");
    controller.set_email("jane@example.com");
    controller.set_motivation("Want to learn");
    controller.toggle_bootcamp(Bootcamp::Frontend);
}

#[tokio::test]
async fn test_register_then_list_e2e() {
    let registry = mock_registry_server().await;

    Mock::given(method("POST"))
        .and(path("/api/ParticipantAPI"))
        .and(body_json(serde_json::json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "discordUser": "janed",
            "bootcampIds": [1],
            "motivation": "Want to learn"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&registry)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/ParticipantAPI"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1,
                "fullName": "Jane Doe",
                "email": "jane@example.com",
                "discordUser": "janed",
                "motivation": "Want to learn",
                "bootcampChoices": ["Frontend"]
            }
        ])))
        .mount(&registry)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let flag_path = dir.path().join("flag.json");

    // Register
    let mut controller = open_controller(&registry, FileFlagStore::new(&flag_path)).await;
    fill_valid(&mut controller);
    controller.submit().await.unwrap();

    assert!(flag_path.exists());

    // The listing shows the stored record with its display labels
    let participants = test_registry_client(&registry).list().await.unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0].full_name, "Jane Doe");
    assert_eq!(participants[0].bootcamp_choices, vec!["Frontend"]);

    // A later session on the same machine is permanently disabled
    let mut reloaded = open_controller(&registry, FileFlagStore::new(&flag_path)).await;
    assert!(reloaded.already_registered());
    assert!(matches!(
        reloaded.submit().await,
        Err(SubmitError::AlreadyRegistered)
    ));
}

#[tokio::test]
async fn test_failed_register_leaves_no_flag_file() {
    let registry = mock_registry_server().await;

    Mock::given(method("POST"))
        .and(path("/api/ParticipantAPI"))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .expect(1)
        .mount(&registry)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let flag_path = dir.path().join("flag.json");

    let store = FileFlagStore::new(&flag_path);
    let mut controller = open_controller(&registry, store.clone()).await;
    fill_valid(&mut controller);

    assert!(controller.submit().await.is_err());

    assert!(!flag_path.exists());
    assert!(store.load().await.unwrap().is_none());
    assert!(controller.can_submit());
}
