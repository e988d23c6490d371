use crate::answers::payload::canned_payload;
use crate::api::TaskApi;
use crate::credentials::SessionToken;
use crate::error::ApiError;
use crate::questions::{Category, ClassifiedQuestion, ClassifiedQuestions};
use futures_util::{StreamExt, stream};
use std::collections::BTreeMap;
use std::pin::pin;
use tracing::{debug, info};

/// Server feedback per question id.
pub type AnswerSheet = BTreeMap<String, String>;

/// Submit the canned answer of `category` for each question.
///
/// At most `max_in_flight` requests are outstanding at once; results are
/// consumed in question order. The first failure stops the category and
/// drops any requests still in flight.
pub async fn submit_category(
    api: &dyn TaskApi,
    token: &SessionToken,
    task_id: &str,
    category: Category,
    questions: &[ClassifiedQuestion],
    max_in_flight: usize,
) -> Result<AnswerSheet, ApiError> {
    let mut sheet = AnswerSheet::new();
    if questions.is_empty() {
        return Ok(sheet);
    }

    let payload = canned_payload(category);
    let payload = &payload;
    let mut results = pin!(
        stream::iter(questions)
            .map(move |question| async move {
                let comment = api
                    .submit_answer(token, task_id, &question.id, payload)
                    .await?;
                Ok::<_, ApiError>((question.id.clone(), comment))
            })
            .buffered(max_in_flight.max(1))
    );

    while let Some(result) = results.next().await {
        let (question_id, comment) = result?;
        debug!(
            task_id,
            question_id = %question_id,
            category = %category,
            comment = %comment,
            "answer submitted"
        );
        sheet.insert(question_id, comment);
    }

    Ok(sheet)
}

/// Submit every category of a task in order and merge the sheets.
pub async fn submit_all(
    api: &dyn TaskApi,
    token: &SessionToken,
    task_id: &str,
    classified: &ClassifiedQuestions,
    max_in_flight: usize,
) -> Result<AnswerSheet, ApiError> {
    let mut merged = AnswerSheet::new();
    for (category, questions) in classified.iter() {
        let sheet =
            submit_category(api, token, task_id, category, questions, max_in_flight).await?;
        if !sheet.is_empty() {
            info!(task_id, category = %category, answered = sheet.len(), "category answered");
        }
        merged.extend(sheet);
    }
    Ok(merged)
}
