//! Navigate command implementation

use super::load_catalog;
use anyhow::{bail, Context, Result};
use gita_core::{parse_location, Location, ReaderController, Step};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// One reader action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavStep {
    Next,
    Previous,
    Verse(u32),
    Chapter(u32),
    Commentary(String),
    Recover,
}

impl FromStr for NavStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = |value: &str| {
            value
                .parse::<u32>()
                .map_err(|_| format!("'{}' is not a valid number", value))
        };

        match s.split_once(':') {
            None => match s {
                "next" | "n" => Ok(Self::Next),
                "prev" | "previous" | "p" => Ok(Self::Previous),
                "recover" => Ok(Self::Recover),
                _ => Err(format!("unknown step '{}'", s)),
            },
            Some(("verse", value)) => number(value).map(Self::Verse),
            Some(("chapter", value)) => number(value).map(Self::Chapter),
            Some(("commentary", key)) if !key.is_empty() => Ok(Self::Commentary(key.to_string())),
            Some(_) => Err(format!("unknown step '{}'", s)),
        }
    }
}

impl fmt::Display for NavStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "next"),
            Self::Previous => write!(f, "prev"),
            Self::Verse(n) => write!(f, "verse:{}", n),
            Self::Chapter(n) => write!(f, "chapter:{}", n),
            Self::Commentary(key) => write!(f, "commentary:{}", key),
            Self::Recover => write!(f, "recover"),
        }
    }
}

/// Replay steps against a controller mounted at `from`
pub fn navigate(catalog: Option<&Path>, from: &str, steps: &[NavStep]) -> Result<()> {
    let catalog = load_catalog(catalog)?;

    let route = match parse_location(from).with_context(|| format!("Invalid location: {}", from))? {
        Location::Read(route) => route,
        other => bail!("Not a reader location: {}", other),
    };

    let mut controller = ReaderController::from_route(catalog, &route);
    println!("start       {}", describe(&controller));

    for step in steps {
        let outcome = match step {
            NavStep::Next => controller.next().map(edge_note),
            NavStep::Previous => controller.previous().map(edge_note),
            NavStep::Verse(n) => controller.jump_to_verse(*n).map(|_| None),
            NavStep::Chapter(n) => controller.jump_to_chapter(*n).map(|_| None),
            NavStep::Commentary(key) => controller.select_commentary(key).map(|_| None),
            NavStep::Recover => Ok({
                controller.recover();
                None
            }),
        };

        let note = match outcome {
            Ok(Some(edge)) => format!(" ({})", edge),
            Ok(None) => String::new(),
            Err(e) => {
                tracing::debug!("Step {} failed: {}", step, e);
                format!(" (error: {})", e)
            }
        };
        println!("{:<12}{}{}", step.to_string(), describe(&controller), note);
    }

    Ok(())
}

fn edge_note(step: Step) -> Option<&'static str> {
    match step {
        Step::Moved(_) => None,
        Step::AtStart => Some("already at first verse"),
        Step::AtEnd => Some("already at last verse"),
    }
}

fn describe(controller: &ReaderController) -> String {
    match (controller.location(), controller.position()) {
        (Some(location), Some(_)) if !controller.is_not_found() => {
            match controller.selected_commentary() {
                Some(key) => format!("{} [{}]", location, key),
                None => location.to_string(),
            }
        }
        _ => "not available".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!("next".parse::<NavStep>().unwrap(), NavStep::Next);
        assert_eq!("p".parse::<NavStep>().unwrap(), NavStep::Previous);
        assert_eq!("verse:2".parse::<NavStep>().unwrap(), NavStep::Verse(2));
        assert_eq!("chapter:1".parse::<NavStep>().unwrap(), NavStep::Chapter(1));
        assert_eq!(
            "commentary:easwaran".parse::<NavStep>().unwrap(),
            NavStep::Commentary("easwaran".to_string())
        );
        assert_eq!("recover".parse::<NavStep>().unwrap(), NavStep::Recover);
    }

    #[test]
    fn test_parse_invalid_steps() {
        assert!("jump".parse::<NavStep>().is_err());
        assert!("verse:x".parse::<NavStep>().is_err());
        assert!("commentary:".parse::<NavStep>().is_err());
        assert!("page:2".parse::<NavStep>().is_err());
    }

    #[test]
    fn test_step_display_round_trips() {
        for step in [NavStep::Next, NavStep::Verse(3), NavStep::Recover] {
            assert_eq!(step.to_string().parse::<NavStep>().unwrap(), step);
        }
    }
}
