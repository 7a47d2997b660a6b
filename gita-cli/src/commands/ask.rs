//! Ask command implementation

use super::load_catalog;
use anyhow::{Context, Result};
use gita_core::chat::{ask_with_timeout, CannedChatService, ChatSession, Role};
use gita_core::VerseRef;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// One citation of the answer
#[derive(Serialize)]
struct CitationInfo {
    verse: String,
    text: String,
    location: Option<String>,
}

/// Answer output
#[derive(Serialize)]
struct AnswerInfo {
    question: String,
    answer: String,
    citations: Vec<CitationInfo>,
}

/// Ask the placeholder chat service one question
pub async fn ask(
    catalog: Option<&Path>,
    question: Option<&str>,
    verse: Option<&str>,
    timeout_ms: u64,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog)?;

    let verse = verse
        .map(|v| v.parse::<VerseRef>())
        .transpose()
        .context("Invalid --verse")?;

    let mut session = ChatSession::seeded(verse);
    let question = match question {
        Some(q) => q.to_string(),
        None => session.draft().to_string(),
    };

    let request = session.begin(&question)?;

    let service = CannedChatService::instant();
    let outcome =
        ask_with_timeout(&service, &request, Duration::from_millis(timeout_ms)).await;
    let failure = outcome.as_ref().err().cloned();
    session.resolve(outcome);
    if let Some(e) = failure {
        return Err(e.into());
    }

    let Some(reply) = session
        .messages()
        .iter()
        .rev()
        .find(|m| m.role == Role::Assistant)
    else {
        anyhow::bail!("No answer received");
    };

    let info = AnswerInfo {
        question: request.question.clone(),
        answer: reply.content.clone(),
        citations: reply
            .citations
            .iter()
            .map(|c| CitationInfo {
                verse: c.verse.clone(),
                text: c.text.clone(),
                location: c.location(&catalog),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Q: {}", info.question);
        println!();
        println!("{}", info.answer);
        if !info.citations.is_empty() {
            println!();
            println!("Citations:");
            for citation in &info.citations {
                println!("  {} \"{}\"", citation.verse, citation.text);
            }
        }
    }

    Ok(())
}
