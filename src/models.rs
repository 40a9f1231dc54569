// models.rs
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A question counts as recent when it was published at most this long ago.
pub fn recent_window() -> TimeDelta {
    TimeDelta::days(1)
}

fn published_recently(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - recent_window() <= pub_date && pub_date <= now
}

/// A stored poll question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        published_recently(self.pub_date, now)
    }
}

/// A question that has not been saved yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl NewQuestion {
    pub fn new(question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            question_text: question_text.into(),
            pub_date,
        }
    }

    /// Publication time offset from now by `days` (negative for the past).
    pub fn published_in_days(question_text: impl Into<String>, days: i64) -> Self {
        Self::new(question_text, Utc::now() + TimeDelta::days(days))
    }

    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        published_recently(self.pub_date, now)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i64,
}

impl Choice {
    pub fn vote(&mut self) {
        self.votes += 1;
    }
}

/// Body of `POST /polls/{question_id}/vote/`.
#[derive(Debug, Default, Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

impl VoteForm {
    pub fn choice_id(&self) -> Option<i64> {
        self.choice.as_deref()?.trim().parse().ok()
    }
}
