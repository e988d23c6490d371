use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use edusp_tasks::api::HttpTaskApi;
use edusp_tasks::config::{ApiConfig, TaskTarget};
use edusp_tasks::workflow::run_workflow;
use edusp_tasks::{ApiError, EduspError};

use crate::fake_platform::{RecordingNotifier, credentials, settings};

fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/tms", server.uri()),
        auth_url: Some(format!("{}/registration/edusp", server.uri())),
        ..ApiConfig::default()
    }
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/registration/edusp"))
        .and(body_json(json!({"ra": "1234567sp", "senha": "senha"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_correction(server: &MockServer, task: &str, question: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/tms/task/{task}/question/{question}/correct")))
        .and(header("x-api-key", "tok-1"))
        .and(body_json(body))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"comment": format!("c-{question}")})),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_run_over_http() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/tms/task"))
        .and(header("x-api-key", "tok-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"tasks": [{"id": 10}, {"id": "11"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tms/task/10/apply"))
        .and(query_param("preview_mode", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": [
                {"id": 1, "type": "true-false", "options": {"0": {"statement": "x"}}},
                {"id": 2, "type": "info", "statement": "read"},
                {"id": 3, "type": "cloud", "options": {}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tms/task/11/apply"))
        .and(query_param("preview_mode", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": [
                {"id": 4, "type": "single", "options": {}},
                {"id": 5, "type": "multi", "options": {}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    mount_correction(&server, "10", "1", json!({"answer": {"answer": {"0": true}}})).await;
    mount_correction(&server, "10", "3", json!({"answer": {"answer": ["palavra"]}})).await;
    mount_correction(&server, "11", "4", json!({"answer": {"0": true}})).await;
    mount_correction(&server, "11", "5", json!({"answer": {"0": true, "1": true}})).await;

    Mock::given(method("POST"))
        .and(path("/tms/task/10/question/2/correct"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = HttpTaskApi::new(&api_config(&server)).unwrap();
    let report = run_workflow(&api, &settings(), credentials(), &RecordingNotifier::default())
        .await
        .unwrap();

    let first = report.task("10").unwrap().answers().unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first["1"], "c-1");
    assert_eq!(first["3"], "c-3");
    let second = report.task("11").unwrap().answers().unwrap();
    assert_eq!(second["4"], "c-4");
    assert_eq!(second["5"], "c-5");
}

#[tokio::test]
async fn rejected_login_makes_no_further_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/registration/edusp"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": []})))
        .expect(0)
        .mount(&server)
        .await;

    let api = HttpTaskApi::new(&api_config(&server)).unwrap();
    let err = run_workflow(&api, &settings(), credentials(), &RecordingNotifier::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EduspError::Api(ApiError::Authentication { status: 403, .. })
    ));
}

#[tokio::test]
async fn single_task_run_never_lists_tasks() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/tms/task"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": []})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tms/task/42/apply"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": [{"id": 7, "type": "single"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_correction(&server, "42", "7", json!({"answer": {"0": true}})).await;

    let mut settings = settings();
    settings.target = TaskTarget::single("42").unwrap();
    let api = HttpTaskApi::new(&api_config(&server)).unwrap();
    let report = run_workflow(&api, &settings, credentials(), &RecordingNotifier::default())
        .await
        .unwrap();

    assert_eq!(report.answered(), 1);
}
