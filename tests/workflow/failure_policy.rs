use edusp_tasks::config::{FailurePolicy, UnknownTypePolicy};
use edusp_tasks::notify::NotifyEvent;
use edusp_tasks::workflow::{FAILURE_MESSAGE, run_workflow};
use edusp_tasks::{ApiError, ClassifyError, EduspError};

use crate::fake_platform::{
    Call, FakePlatform, RecordingNotifier, credentials, question, settings,
};

fn three_tasks() -> FakePlatform {
    FakePlatform::new()
        .with_task("1", vec![question("1a", "single")])
        .with_task("2", vec![question("2a", "single"), question("2b", "multi")])
        .with_task("3", vec![question("3a", "cloud")])
}

#[tokio::test]
async fn submission_failure_aborts_remaining_tasks_by_default() {
    let platform = three_tasks().failing_submission_of("2a");
    let notifier = RecordingNotifier::default();

    let err = run_workflow(&platform, &settings(), credentials(), &notifier)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EduspError::Api(ApiError::Submission { ref question_id, .. }) if question_id == "2a"
    ));
    let calls = platform.calls();
    assert!(!calls.contains(&Call::FetchQuestions("3".into())));
    // later categories of the failing task are never submitted
    assert!(platform.submissions().iter().all(|(_, qid, _)| qid != "2b"));
    assert_eq!(
        notifier.events().last(),
        Some(&NotifyEvent::RunFailed {
            message: FAILURE_MESSAGE.into()
        })
    );
}

#[tokio::test]
async fn fetch_failure_aborts_the_run() {
    let platform = three_tasks().failing_fetch_of("1");

    let err = run_workflow(
        &platform,
        &settings(),
        credentials(),
        &RecordingNotifier::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, EduspError::Api(ApiError::Fetch { status: 500, .. })));
    assert!(platform.submissions().is_empty());
}

#[tokio::test]
async fn continue_policy_records_failure_and_moves_on() {
    let platform = three_tasks().failing_fetch_of("2");
    let mut settings = settings();
    settings.failure_policy = FailurePolicy::ContinueWithNextTask;
    let notifier = RecordingNotifier::default();

    let report = run_workflow(&platform, &settings, credentials(), &notifier)
        .await
        .unwrap();

    assert_eq!(report.completed(), 2);
    assert_eq!(report.failed(), 1);
    assert!(!report.task("2").unwrap().is_completed());
    assert!(report.task("3").unwrap().is_completed());

    let events = notifier.events();
    assert!(events.iter().any(|e| matches!(
        e,
        NotifyEvent::TaskFailed { task_id, .. } if task_id == "2"
    )));
    let last = events.last().unwrap();
    assert_eq!(last, &NotifyEvent::RunCompleted { tasks: 3, failed: 1 });
    assert!(last.is_failure());
    assert!(!last.message().contains("All activities completed"));
}

#[tokio::test]
async fn continue_policy_still_aborts_on_login_failure() {
    let platform = three_tasks().rejecting_login();
    let mut settings = settings();
    settings.failure_policy = FailurePolicy::ContinueWithNextTask;

    let err = run_workflow(
        &platform,
        &settings,
        credentials(),
        &RecordingNotifier::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, EduspError::Api(ApiError::Authentication { .. })));
    assert_eq!(platform.calls(), vec![Call::Authenticate]);
}

#[tokio::test]
async fn unknown_question_type_fails_the_task_by_default() {
    let platform = FakePlatform::new().with_task(
        "8",
        vec![question("1", "single"), question("2", "order-sentences")],
    );

    let err = run_workflow(
        &platform,
        &settings(),
        credentials(),
        &RecordingNotifier::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        EduspError::Classify(ClassifyError::UnknownQuestionType { ref question_id, ref kind })
            if question_id == "2" && kind == "order-sentences"
    ));
    assert!(platform.submissions().is_empty());
}

#[tokio::test]
async fn skip_policy_answers_known_questions_only() {
    let platform = FakePlatform::new().with_task(
        "8",
        vec![question("1", "single"), question("2", "order-sentences")],
    );
    let mut settings = settings();
    settings.unknown_type_policy = UnknownTypePolicy::Skip;

    let report = run_workflow(
        &platform,
        &settings,
        credentials(),
        &RecordingNotifier::default(),
    )
    .await
    .unwrap();

    let answers = report.task("8").unwrap().answers().unwrap();
    assert_eq!(answers.keys().collect::<Vec<_>>(), ["1"]);
}

#[tokio::test]
async fn repeated_runs_send_identical_submissions() {
    let platform = three_tasks();

    for _ in 0..2 {
        run_workflow(
            &platform,
            &settings(),
            credentials(),
            &RecordingNotifier::default(),
        )
        .await
        .unwrap();
    }

    let submissions = platform.submissions();
    let (first, second) = submissions.split_at(submissions.len() / 2);
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}
