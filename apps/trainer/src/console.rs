//! Line-oriented terminal front end.

use crate::commands::{self, CommandError, Confirm};
use crate::render;
use crate::state::AppState;
use quest_core::{grammar_tip, SessionEvent, SessionKind, Step};
use std::io::{self, BufRead, Write};

/// Reads commands from `input` and writes fragments to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
    grammar_cursor: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            grammar_cursor: 0,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self, state: &mut AppState) -> io::Result<()> {
        self.show_status(state)?;
        writeln!(self.output, "{}", render::MENU)?;

        while let Some(line) = read_line(&mut self.input)? {
            let line = line.trim();
            if matches!(line, "exit" | "quit") {
                break;
            }

            if state.session.is_some() {
                self.handle_session_input(state, line)?;
                continue;
            }

            match line {
                "" => {}
                "q" => self.start(state, SessionKind::Quick)?,
                "e" => self.start(state, SessionKind::Easy)?,
                "g" => {
                    let tip = grammar_tip(self.grammar_cursor);
                    self.grammar_cursor += 1;
                    writeln!(self.output, "{}", render::grammar_card(tip))?;
                }
                "d" => match commands::mark_done(state) {
                    Ok(_) => {
                        writeln!(self.output, "{}", render::completion_notice())?;
                        self.show_status(state)?;
                    }
                    Err(e) => self.report(e)?,
                },
                "x" => match commands::add_experience(state) {
                    Ok(xp) => writeln!(self.output, "+1 XP (total {xp})")?,
                    Err(e) => self.report(e)?,
                },
                "a" => self.add_words(state)?,
                "l" => match commands::load_default_set(state) {
                    Ok(added) => writeln!(self.output, "{}", render::default_set_notice(added))?,
                    Err(e) => self.report(e)?,
                },
                "s" => {
                    let enabled = !state.profile.strict_mode;
                    match commands::set_strict_mode(state, enabled) {
                        Ok(()) => writeln!(self.output, "{}", render::strict_mode_notice(enabled))?,
                        Err(e) => self.report(e)?,
                    }
                }
                "r" => self.reset(state)?,
                "?" => self.show_status(state)?,
                "h" | "help" => writeln!(self.output, "{}", render::MENU)?,
                other => writeln!(self.output, "unknown command: {other} (h for help)")?,
            }
        }

        self.output.flush()
    }

    fn start(&mut self, state: &mut AppState, kind: SessionKind) -> io::Result<()> {
        match commands::start_session(state, kind) {
            Ok(true) => self.show_step(state),
            Ok(false) => writeln!(self.output, "No words yet. Add some with 'a' or 'l'."),
            Err(e) => self.report(e),
        }
    }

    fn handle_session_input(&mut self, state: &mut AppState, line: &str) -> io::Result<()> {
        let on_sentence = match state.session.as_ref().map(|s| s.step(&state.profile)) {
            Some(Step::Sentence(_)) => true,
            Some(Step::Word { .. }) => false,
            _ => {
                state.session = None;
                return Ok(());
            }
        };

        let result = if on_sentence {
            commands::finish_sentence(state)
        } else {
            match line {
                "y" => commands::answer_word(state, true),
                "n" => commands::answer_word(state, false),
                _ => {
                    writeln!(self.output, "answer with y or n")?;
                    return Ok(());
                }
            }
        };

        match result {
            Ok(SessionEvent::Completed) => {
                writeln!(self.output, "{}", render::completion_notice())?;
                self.show_status(state)
            }
            Ok(_) => self.show_step(state),
            Err(e) => {
                state.session = None;
                self.report(e)
            }
        }
    }

    fn show_step(&mut self, state: &AppState) -> io::Result<()> {
        let Some(session) = state.session.as_ref() else {
            return Ok(());
        };
        match session.step(&state.profile) {
            Step::Word { position, total, word } => {
                writeln!(self.output, "{}", render::word_card(position, total, word))
            }
            Step::Sentence(sentence) => writeln!(self.output, "{}", render::sentence_card(sentence)),
            Step::Complete => Ok(()),
        }
    }

    fn add_words(&mut self, state: &mut AppState) -> io::Result<()> {
        writeln!(self.output, "Enter one 'english = translation' per line, empty line to finish:")?;
        let mut text = String::new();
        while let Some(line) = read_line(&mut self.input)? {
            if line.trim().is_empty() {
                break;
            }
            text.push_str(&line);
            text.push('\n');
        }

        match commands::add_words(state, &text) {
            Ok(report) => writeln!(self.output, "{}", render::import_notice(&report)),
            Err(e) => self.report(e),
        }
    }

    fn reset(&mut self, state: &mut AppState) -> io::Result<()> {
        let mut prompt = LinePrompt {
            input: &mut self.input,
            output: &mut self.output,
        };
        match commands::reset_profile(state, &mut prompt) {
            Ok(true) => {
                writeln!(self.output, "Reset done. Start with a quick session.")?;
                self.show_status(state)
            }
            Ok(false) => writeln!(self.output, "Reset cancelled."),
            Err(e) => self.report(e),
        }
    }

    fn show_status(&mut self, state: &AppState) -> io::Result<()> {
        writeln!(self.output, "{}", render::status_line(&commands::get_status(state)))
    }

    fn report(&mut self, error: CommandError) -> io::Result<()> {
        tracing::warn!(error = %error, "command failed");
        writeln!(self.output, "error: {error}")
    }
}

/// Yes/no prompt over the console streams. Unreadable input counts as "no".
struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{prompt} [y/N] ").and_then(|_| self.output.flush()).is_err() {
            return false;
        }
        matches!(
            read_line(&mut *self.input).ok().flatten().as_deref().map(str::trim),
            Some("y") | Some("yes")
        )
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
