//! Terminal output for command results.
//!
//! Listings go to stdout so they can be piped. Notices about empty listings
//! go to stderr, as do warnings.

use colored::Colorize;
use stask::api::{CmdMessage, MessageLevel};
use stask::model::{StateChange, StateMap};

const INDENT: &str = "    ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

/// Prints `title` followed by one `key : value` line per entry, or `empty`
/// on stderr when there are no entries.
pub(super) fn print_values(title: &str, values: &StateMap, empty: &str) {
    if values.is_empty() {
        eprintln!("{}", empty);
        return;
    }
    println!("{}", title.bold());
    print!("{}", format_values(values));
}

pub(super) fn print_names(title: &str, names: &[String], empty: &str) {
    if names.is_empty() {
        eprintln!("{}", empty);
        return;
    }
    println!("{}", title.bold());
    print!("{}", format_names(names));
}

pub(super) fn print_changes(profile: &str, changes: &[StateChange]) {
    println!("{}", format!("{} - applying profile...", profile).bold());
    print!("{}", format_changes(changes));
    println!();
}

fn format_values(values: &StateMap) -> String {
    values
        .iter()
        .map(|(key, value)| format!("{INDENT}{key} : {value}\n"))
        .collect()
}

fn format_names(names: &[String]) -> String {
    names.iter().map(|name| format!("{INDENT}{name}\n")).collect()
}

fn format_changes(changes: &[StateChange]) -> String {
    changes
        .iter()
        .map(|change| {
            if change.is_unchanged() {
                format!("{INDENT}{} : {} [unchanged]\n", change.key, change.value)
            } else {
                let previous = change.previous.as_deref().unwrap_or("-");
                format!(
                    "{INDENT}{} : {} -> {}\n",
                    change.key, previous, change.value
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_indented_and_sorted() {
        let mut values = StateMap::new();
        values.insert("b".into(), "2".into());
        values.insert("a".into(), "1".into());
        assert_eq!(format_values(&values), "    a : 1\n    b : 2\n");
    }

    #[test]
    fn names_one_per_line() {
        let names = vec!["build".to_string(), "deploy".to_string()];
        assert_eq!(format_names(&names), "    build\n    deploy\n");
    }

    #[test]
    fn changes_show_previous_or_dash() {
        let changes = vec![
            StateChange {
                key: "env".into(),
                previous: Some("prod".into()),
                value: "dev".into(),
            },
            StateChange {
                key: "new".into(),
                previous: None,
                value: "x".into(),
            },
            StateChange {
                key: "same".into(),
                previous: Some("v".into()),
                value: "v".into(),
            },
        ];
        assert_eq!(
            format_changes(&changes),
            "    env : prod -> dev\n    new : - -> x\n    same : v [unchanged]\n"
        );
    }
}
