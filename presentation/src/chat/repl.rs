//! REPL (Read-Eval-Print Loop) for interactive chat

use super::turn::run_turn;
use crate::output::console::ConsoleSink;
use crate::output::labels::Labels;
use colored::Colorize;
use duet_application::Orchestrator;
use duet_domain::Query;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io;

const EXIT_COMMANDS: [&str; 4] = ["quit", "exit", "종료", "/quit"];

/// Whether `line` ends the session.
pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    EXIT_COMMANDS.contains(&line.as_str())
}

/// Interactive chat REPL
pub struct ChatRepl {
    orchestrator: Orchestrator,
    quiet: bool,
}

impl ChatRepl {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            quiet: false,
        }
    }

    /// Set whether to hide the spinner
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run the interactive REPL until an exit command, Ctrl-D or a read error.
    pub async fn run(&self) -> io::Result<()> {
        let locale = self.orchestrator.client().locale();
        let labels = Labels::for_locale(locale);
        let mut line_editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(labels.repl_prompt.to_string()),
            DefaultPromptSegment::Empty,
        );
        let mut sink = ConsoleSink::stdout(locale);

        println!("\n{}", labels.repl_hint.cyan());

        loop {
            // reedline blocks on terminal input
            let signal = tokio::task::block_in_place(|| line_editor.read_line(&prompt))?;

            match signal {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if is_exit_command(line) {
                        println!("{}", labels.goodbye);
                        break;
                    }
                    if let Some(query) = Query::try_new(line) {
                        run_turn(&self.orchestrator, &query, &mut sink, self.quiet).await;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("{}", labels.goodbye);
                    break;
                }
            }
        }

        Ok(())
    }
}
