// src/render.rs
//! HTML fragments for the polls pages.

use serde::Serialize;

use crate::models::{Choice, Question};
use crate::routes::Route;

pub const NO_POLLS: &str = "No polls are available.";
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";
pub const NO_CHOICES: &str = "No choices yet.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexContext {
    pub latest_question_list: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailContext {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub error_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsContext {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl ResultsContext {
    pub fn total_votes(&self) -> i64 {
        self.choices.iter().map(|c| c.votes).sum()
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn index(ctx: &IndexContext) -> String {
    if ctx.latest_question_list.is_empty() {
        return format!("<p>{NO_POLLS}</p>\n");
    }

    let items: String = ctx
        .latest_question_list
        .iter()
        .map(|question| {
            format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                Route::Detail(question.id),
                escape(&question.question_text)
            )
        })
        .collect();

    format!("<ul>\n{items}</ul>\n")
}

pub fn detail(ctx: &DetailContext) -> String {
    let question = &ctx.question;

    let error = ctx
        .error_message
        .map(|message| format!("<p><strong>{message}</strong></p>\n"))
        .unwrap_or_default();

    let radios: String = ctx
        .choices
        .iter()
        .map(|choice| {
            format!(
                "<input type=\"radio\" name=\"choice\" id=\"choice{id}\" value=\"{id}\">\
                 <label for=\"choice{id}\">{text}</label><br>\n",
                id = choice.id,
                text = escape(&choice.choice_text)
            )
        })
        .collect();

    format!(
        "<h1>{}</h1>\n{error}<form action=\"{}\" method=\"post\">\n{radios}\
         <input type=\"submit\" value=\"Vote\">\n</form>\n",
        escape(&question.question_text),
        Route::Vote(question.id)
    )
}

fn votes_label(votes: i64) -> String {
    if votes == 1 {
        "1 vote".to_string()
    } else {
        format!("{votes} votes")
    }
}

pub fn results(ctx: &ResultsContext) -> String {
    let question = &ctx.question;

    let tallies = if ctx.choices.is_empty() {
        format!("<p>{NO_CHOICES}</p>\n")
    } else {
        let items: String = ctx
            .choices
            .iter()
            .map(|choice| {
                format!(
                    "<li>{} -- {}</li>\n",
                    escape(&choice.choice_text),
                    votes_label(choice.votes)
                )
            })
            .collect();
        format!(
            "<ul>\n{items}</ul>\n<p>Total: {}</p>\n",
            votes_label(ctx.total_votes())
        )
    };

    format!(
        "<h1>{}</h1>\n{tallies}<a href=\"{}\">Vote again?</a>\n",
        escape(&question.question_text),
        Route::Detail(question.id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn question(id: i64, text: &str) -> Question {
        Question {
            id,
            question_text: text.to_string(),
            pub_date: Utc::now(),
        }
    }

    fn choice(id: i64, text: &str, votes: i64) -> Choice {
        Choice {
            id,
            question_id: 1,
            choice_text: text.to_string(),
            votes,
        }
    }

    #[test]
    fn empty_index_says_no_polls() {
        let body = index(&IndexContext {
            latest_question_list: vec![],
        });
        assert!(body.contains(NO_POLLS));
    }

    #[test]
    fn index_links_to_detail() {
        let body = index(&IndexContext {
            latest_question_list: vec![question(4, "Past question")],
        });
        assert!(body.contains("href=\"/polls/4/\""));
        assert!(body.contains("Past question"));
        assert!(!body.contains(NO_POLLS));
    }

    #[test]
    fn detail_shows_error_and_radios() {
        let body = detail(&DetailContext {
            question: question(2, "Pick one"),
            choices: vec![choice(5, "Red", 0)],
            error_message: Some(NO_CHOICE_SELECTED),
        });
        assert!(body.contains("action=\"/polls/2/vote/\""));
        assert!(body.contains("value=\"5\""));
        assert!(body.contains(NO_CHOICE_SELECTED));
    }

    #[test]
    fn question_text_is_escaped() {
        let body = detail(&DetailContext {
            question: question(1, "<script>"),
            choices: vec![],
            error_message: None,
        });
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }

    #[test]
    fn results_pluralises_votes() {
        let ctx = ResultsContext {
            question: question(1, "Pick one"),
            choices: vec![choice(1, "Red", 1), choice(2, "Blue", 3)],
        };
        let body = results(&ctx);
        assert!(body.contains("Red -- 1 vote<"));
        assert!(body.contains("Blue -- 3 votes"));
        assert!(body.contains("Total: 4 votes"));
    }
}
