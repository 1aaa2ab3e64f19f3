use serde_json::{json, Value};
use crate::quiz_engine::{
    models::Question,
    session::{GameState, RoundStatus, SessionState},
};

/// Build one question entry. The answer key is only included once revealed.
fn question_view(q: &Question, reveal: bool) -> Value {
    json!({
        "id": q.id,
        "prompt": q.prompt,
        "hint": q.hint,
        "choices": q.choices,
        "correct_index": if reveal { json!(q.correct_index) } else { Value::Null },
        "collection_name": if reveal { json!(q.collection_name) } else { Value::Null },
        "audio_url": q.audio_url,
    })
}

/// Derive the status string and selected choice.
fn status_fields(status: RoundStatus) -> (&'static str, Option<usize>) {
    match status {
        RoundStatus::Playing               => ("playing", None),
        RoundStatus::Answered { selected } => ("answered", Some(selected)),
        RoundStatus::Finished              => ("finished", None),
    }
}

fn round_view(round: &GameState) -> Value {
    let (status, selected) = status_fields(round.status);
    let reveal = !matches!(round.status, RoundStatus::Playing);
    let current = round
        .current_question()
        .map(|q| question_view(q, reveal))
        .unwrap_or(Value::Null);

    json!({
        "state": "active",
        "mode": round.mode.slug(),
        "title": round.mode.to_string(),
        "status": status,
        "current_index": round.current_index,
        "total": round.questions.len(),
        "question": current,
        "selected": selected,
        "score": round.tally.score,
        "streak": round.tally.streak,
        "best_streak": round.tally.best_streak,
        "answers": round.answers,
    })
}

/// Map a session snapshot to the JSON object a client renders.
///
/// The correct index of the current question is withheld while it is still
/// waiting for an answer.
pub fn client_state(state: &SessionState) -> Value {
    match state {
        SessionState::Idle => json!({ "state": "idle", "loading": false }),
        SessionState::Loading { mode } => json!({
            "state": "loading",
            "loading": true,
            "mode": mode.slug(),
            "title": mode.to_string(),
        }),
        SessionState::Active(round) => {
            let mut v = round_view(round);
            v["loading"] = json!(false);
            v
        }
    }
}
