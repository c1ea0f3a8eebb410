//! Console output formatter for summary views

use crate::output::formatter::{OutputFormatter, SummaryPage};
use colored::{ColoredString, Colorize};
use summary_domain::{ClarifierAnswer, Conflict, SessionContext, SessionSummary, SummaryState};

const LOADING: &str = "Loading summary...";
const NO_CLARIFIERS: &str = "No clarifier responses found.";
const NO_CONFLICTS: &str = "No conflicts identified.";

/// Formats summary views for console display
///
/// The session header is always printed. Below it comes exactly one of:
/// the loading line, the error line, or the two summary sections.
pub struct ConsoleFormatter {
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Format the complete view
    pub fn format(&self, page: &SummaryPage<'_>) -> String {
        let mut output = String::new();

        output.push_str(&self.header("Session Summary"));
        output.push('\n');
        output.push_str(&self.session_info(page.session));

        match page.summary {
            SummaryState::Idle | SummaryState::Loading => {
                output.push_str(&format!(
                    "\n{}\n",
                    self.paint(LOADING, |s| s.yellow().bold())
                ));
            }
            SummaryState::Failed(error) => {
                output.push_str(&format!(
                    "\n{}\n",
                    self.paint(error.message(), |s| s.red().bold())
                ));
            }
            SummaryState::Loaded(summary) => {
                output.push_str(&self.summary_sections(summary));
            }
        }

        output.push_str(&self.footer());
        output
    }

    /// Format as JSON
    pub fn format_json(page: &SummaryPage<'_>) -> String {
        serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string())
    }

    fn session_info(&self, session: &SessionContext) -> String {
        [
            ("User ID:", session.user_id()),
            ("Session ID:", session.session_id()),
            ("Idea:", session.user_idea()),
        ]
        .iter()
        .map(|(label, value)| format!("{} {}\n", self.paint(label, |s| s.cyan().bold()), value))
        .collect()
    }

    fn summary_sections(&self, summary: &SessionSummary) -> String {
        let mut output = String::new();

        output.push_str(&self.section_header("Clarifier Responses"));
        if summary.clarifiers.is_empty() {
            output.push_str(&format!("{}\n", self.paint(NO_CLARIFIERS, |s| s.dimmed())));
        } else {
            for (idx, item) in summary.clarifiers.iter().enumerate() {
                output.push_str(&self.clarifier_entry(idx + 1, item));
            }
        }

        output.push_str(&self.section_header("Conflict Resolution"));
        if summary.conflicts.is_empty() {
            output.push_str(&format!("{}\n", self.paint(NO_CONFLICTS, |s| s.dimmed())));
        } else {
            for (idx, conflict) in summary.conflicts.iter().enumerate() {
                output.push_str(&self.conflict_entry(idx + 1, conflict));
            }
        }

        output
    }

    fn clarifier_entry(&self, number: usize, item: &ClarifierAnswer) -> String {
        let question = format!("Q{}: {}", number, item.prompt());
        let answer = format!("A: {}", item.answer_or_default());
        format!(
            "\n{}\n  {}\n",
            self.paint(&question, |s| s.bold()),
            self.paint(&answer, |s| s.green())
        )
    }

    fn conflict_entry(&self, number: usize, conflict: &Conflict) -> String {
        let title = format!("Conflict {}: {}", number, conflict.label());
        let mut output = format!("\n{}\n", self.paint(&title, |s| s.bold()));

        for option in conflict.option_list() {
            output.push_str(&format!("  - {}\n", option));
        }

        if let Some(resolved) = conflict.resolution() {
            let line = format!("Resolved: {}", resolved);
            output.push_str(&format!("  {}\n", self.paint(&line, |s| s.blue())));
        }

        output
    }

    fn header(&self, title: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n{:^60}\n{}",
            self.paint(&line, |s| s.cyan()),
            self.paint(title, |s| s.bold()),
            self.paint(&line, |s| s.cyan())
        )
    }

    fn section_header(&self, title: &str) -> String {
        format!(
            "\n{}\n{}\n",
            self.paint(title, |s| s.cyan().bold()),
            "-".repeat(40)
        )
    }

    fn footer(&self) -> String {
        format!("\n{}\n", self.paint(&"=".repeat(60), |s| s.cyan()))
    }

    fn paint<'a>(&self, text: &'a str, style: impl FnOnce(&'a str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, page: &SummaryPage<'_>) -> String {
        ConsoleFormatter::format(self, page)
    }

    fn format_json(&self, page: &SummaryPage<'_>) -> String {
        Self::format_json(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summary_domain::{FetchError, OutputFormat};

    fn session() -> SessionContext {
        SessionContext::new(
            Some("s1".to_string()),
            Some("u1".to_string()),
            Some("A travel planner".to_string()),
        )
    }

    fn render(state: &SummaryState) -> String {
        let session = session();
        ConsoleFormatter::new(false).format(&SummaryPage::new(&session, state))
    }

    #[test]
    fn test_session_info_always_shown() {
        for state in [
            SummaryState::Idle,
            SummaryState::Loading,
            SummaryState::Failed(FetchError::generic()),
            SummaryState::Loaded(SessionSummary::default()),
        ] {
            let output = render(&state);
            assert!(output.contains("User ID: u1"));
            assert!(output.contains("Session ID: s1"));
            assert!(output.contains("Idea: A travel planner"));
        }
    }

    #[test]
    fn test_loading_hides_everything_else() {
        for state in [SummaryState::Idle, SummaryState::Loading] {
            let output = render(&state);
            assert!(output.contains(LOADING));
            assert!(!output.contains("Clarifier Responses"));
            assert!(!output.contains("Conflict Resolution"));
        }
    }

    #[test]
    fn test_error_replaces_content() {
        let output = render(&SummaryState::Failed(FetchError::from_server_message(Some(
            "Session expired",
        ))));
        assert!(output.contains("Session expired"));
        assert!(!output.contains(LOADING));
        assert!(!output.contains("Clarifier Responses"));
    }

    #[test]
    fn test_empty_lists_show_empty_states() {
        let output = render(&SummaryState::Loaded(SessionSummary::default()));
        assert!(output.contains(NO_CLARIFIERS));
        assert!(output.contains(NO_CONFLICTS));
    }

    #[test]
    fn test_lists_render_independently() {
        let summary = SessionSummary::new(vec![ClarifierAnswer::new("Q?", "A!")], vec![]);
        let output = render(&SummaryState::Loaded(summary));
        assert!(output.contains("Q1: Q?"));
        assert!(!output.contains(NO_CLARIFIERS));
        assert!(output.contains(NO_CONFLICTS));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let summary = SessionSummary::new(
            vec![ClarifierAnswer::new("Q?", "A!")],
            vec![Conflict::new("I1", vec!["x".into(), "y".into()]).with_resolution("x")],
        );
        let output = render(&SummaryState::Loaded(summary));

        assert!(output.contains("Q1: Q?\n  A: A!\n"));
        assert!(output.contains("Conflict 1: I1\n  - x\n  - y\n  Resolved: x\n"));
    }

    #[test]
    fn test_choices_and_missing_fields() {
        let choices_only = Conflict {
            question: Some("Which platform?".to_string()),
            choices: Some(vec!["A".to_string(), "B".to_string()]),
            ..Default::default()
        };
        let unanswered = ClarifierAnswer {
            text: Some("Budget?".to_string()),
            ..Default::default()
        };
        let output = render(&SummaryState::Loaded(SessionSummary::new(
            vec![unanswered],
            vec![choices_only],
        )));

        assert!(output.contains("Q1: Budget?\n  A: No answer provided\n"));
        assert!(output.contains("Conflict 1: Which platform?\n  - A\n  - B\n"));
        assert!(!output.contains("Resolved:"));
    }

    #[test]
    fn test_numbering_is_one_based_in_order() {
        let summary = SessionSummary::new(
            vec![
                ClarifierAnswer::new("First?", "1"),
                ClarifierAnswer::new("Second?", "2"),
            ],
            vec![],
        );
        let output = render(&SummaryState::Loaded(summary));
        let first = output.find("Q1: First?").unwrap();
        let second = output.find("Q2: Second?").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_color_adds_escape_codes() {
        colored::control::set_override(true);
        let session = session();
        let state = SummaryState::Loading;
        let output = ConsoleFormatter::new(true).format(&SummaryPage::new(&session, &state));
        assert!(output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_output() {
        let session = session();
        let state = SummaryState::Loaded(SessionSummary::new(
            vec![ClarifierAnswer::new("Q?", "A!")],
            vec![],
        ));
        let page = SummaryPage::new(&session, &state);
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::new(false).render(&page, OutputFormat::Json))
                .unwrap();

        assert_eq!(json["session"]["session_id"], "s1");
        assert_eq!(json["summary"]["status"], "loaded");
        assert_eq!(json["summary"]["clarifiers"][0]["question"], "Q?");
    }
}
