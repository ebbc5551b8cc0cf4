//! Line-driven questionnaire session
//!
//! The session holds no terminal state. [`run_session`] drives it with any
//! line source, so the interactive loop in `main` and the tests run the
//! same code.

use covira_ai::{AnswerSet, Question};

use crate::locale::LanguagePack;

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStep {
    /// Show the prompt for this question next
    Ask(Question),
    /// The line was not understood; ask the question again after the message
    Retry(Question, String),
    /// All ten questions answered
    Done(AnswerSet),
    Aborted,
}

/// Parse a yes/no reply. An empty line counts as "no", like an unticked box.
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "1" | "true" => Some(true),
        "" | "n" | "no" | "0" | "false" => Some(false),
        _ => None,
    }
}

pub fn prompt(question: Question) -> String {
    format!(
        "[{}/{}] {}? [y/N] ",
        question.index() + 1,
        Question::ALL.len(),
        question.label()
    )
}

#[derive(Debug, Default)]
pub struct FormSession {
    answers: AnswerSet,
    cursor: usize,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Question> {
        Question::ALL.get(self.cursor).copied()
    }

    /// Step to start from: ask the first question
    pub fn start(&self) -> FormStep {
        match self.current() {
            Some(q) => FormStep::Ask(q),
            None => FormStep::Done(self.answers),
        }
    }

    /// Section heading to print before the current question, if it opens a section
    pub fn heading(&self, pack: &LanguagePack) -> Option<&'static str> {
        let q = self.current()?;
        let opens = match self.cursor.checked_sub(1) {
            None => true,
            Some(prev) => Question::ALL[prev].section() != q.section(),
        };
        opens.then(|| pack.section_heading(q.section()))
    }

    pub fn handle_line(&mut self, line: &str) -> FormStep {
        let trimmed = line.trim();
        if matches!(trimmed, ":q" | ":quit" | ":exit") {
            return FormStep::Aborted;
        }
        let Some(question) = self.current() else {
            return FormStep::Done(self.answers);
        };
        let Some(value) = parse_answer(trimmed) else {
            return FormStep::Retry(
                question,
                format!(
                    "please answer y or n for '{}' (:quit to abort)",
                    question.label()
                ),
            );
        };
        self.answers.set(question, value);
        self.cursor += 1;
        self.start()
    }
}

/// Ask every question through `read_line` until the form is complete.
///
/// `read_line` gets the prompt and returns the reply, or `None` when input
/// ends. `say` receives headings and retry messages. Returns `Ok(None)` if
/// the user aborts or input ends before the last answer.
pub fn run_session<R, S, E>(
    pack: &LanguagePack,
    mut read_line: R,
    mut say: S,
) -> Result<Option<AnswerSet>, E>
where
    R: FnMut(&str) -> Result<Option<String>, E>,
    S: FnMut(&str),
{
    let mut session = FormSession::new();
    let mut step = session.start();
    loop {
        let question = match step {
            FormStep::Ask(q) => {
                if let Some(heading) = session.heading(pack) {
                    say(heading);
                }
                q
            }
            FormStep::Retry(q, message) => {
                say(&message);
                q
            }
            FormStep::Done(answers) => return Ok(Some(answers)),
            FormStep::Aborted => return Ok(None),
        };
        let Some(line) = read_line(&prompt(question))? else {
            return Ok(None);
        };
        step = session.handle_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;

    #[test]
    fn answer_parsing() {
        for yes in ["y", "Y", " yes ", "1", "TRUE"] {
            assert_eq!(parse_answer(yes), Some(true), "{yes:?}");
        }
        for no in ["", "n", "No", "0", "false"] {
            assert_eq!(parse_answer(no), Some(false), "{no:?}");
        }
        assert_eq!(parse_answer("maybe"), None);
    }

    #[test]
    fn ten_answers_complete_the_form() {
        let mut session = FormSession::new();
        let replies = ["y", "n", "", "yes", "0", "n", "y", "n", "n", "1"];
        let mut last = None;
        for reply in replies {
            last = Some(session.handle_line(reply));
        }
        let expected = AnswerSet {
            breathing: true,
            sore_throat: true,
            contact: true,
            family_public: true,
            ..AnswerSet::default()
        };
        assert_eq!(last, Some(FormStep::Done(expected)));
        assert!(session.current().is_none());
    }

    #[test]
    fn unclear_reply_repeats_the_question() {
        let mut session = FormSession::new();
        assert!(matches!(
            session.handle_line("perhaps"),
            FormStep::Retry(Question::Breathing, _)
        ));
        assert_eq!(session.current(), Some(Question::Breathing));
        assert_eq!(session.handle_line("y"), FormStep::Ask(Question::Fever));
        assert_eq!(prompt(Question::Fever), "[2/10] Fever? [y/N] ");
    }

    #[test]
    fn quit_aborts() {
        let mut session = FormSession::new();
        session.handle_line("y");
        assert_eq!(session.handle_line(":quit"), FormStep::Aborted);
    }

    #[test]
    fn headings_open_each_section_once() {
        let pack = Language::English.pack();
        let mut session = FormSession::new();
        let mut headings = Vec::new();
        while session.current().is_some() {
            if let Some(h) = session.heading(pack) {
                headings.push((session.current(), h));
            }
            session.handle_line("n");
        }
        assert_eq!(
            headings,
            vec![
                (Some(Question::Breathing), "Health Symptoms"),
                (Some(Question::Abroad), "Exposure History"),
            ]
        );
    }

    fn replay(
        replies: &[&str],
    ) -> (Result<Option<AnswerSet>, std::convert::Infallible>, Vec<String>, Vec<String>) {
        let mut lines = replies.iter();
        let mut prompts = Vec::new();
        let mut said = Vec::new();
        let outcome = run_session(
            Language::English.pack(),
            |p| {
                prompts.push(p.to_string());
                Ok(lines.next().map(|l| l.to_string()))
            },
            |text| said.push(text.to_string()),
        );
        (outcome, prompts, said)
    }

    #[test]
    fn session_collects_all_answers() {
        let (outcome, prompts, said) =
            replay(&["n", "y", "n", "n", "n", "n", "n", "n", "n", "y"]);
        let expected = AnswerSet {
            fever: true,
            family_public: true,
            ..AnswerSet::default()
        };
        assert_eq!(outcome, Ok(Some(expected)));
        assert_eq!(prompts.len(), 10);
        assert_eq!(prompts[9], "[10/10] Family Working in Public Exposed Places? [y/N] ");
        assert_eq!(said, vec!["Health Symptoms", "Exposure History"]);
    }

    #[test]
    fn session_repeats_a_question_after_unclear_reply() {
        let (outcome, prompts, said) =
            replay(&["what", "y", "n", "n", "n", "n", "n", "n", "n", "n", "n"]);
        assert_eq!(outcome.unwrap().map(|a| a.breathing), Some(true));
        assert_eq!(prompts[0], prompts[1]);
        assert!(said[1].starts_with("please answer y or n for 'Breathing Problem'"));
    }

    #[test]
    fn ended_input_does_not_assess_a_partial_form() {
        let (outcome, prompts, _) = replay(&["y", "y", "y"]);
        assert_eq!(outcome, Ok(None));
        assert_eq!(prompts.len(), 4);
    }

    #[test]
    fn quit_ends_the_session() {
        let (outcome, prompts, _) = replay(&["y", ":q", "y"]);
        assert_eq!(outcome, Ok(None));
        assert_eq!(prompts.len(), 2);
    }

    #[test]
    fn read_errors_are_returned() {
        let outcome = run_session(
            Language::English.pack(),
            |_| Err::<Option<String>, _>("terminal gone"),
            |_| {},
        );
        assert_eq!(outcome, Err("terminal gone"));
    }
}
