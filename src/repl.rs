// repl.rs

use std::io::{self, ErrorKind};

use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use tracing::debug;

use crate::completion::CommandCompleter;
use crate::config::ShellConfig;
use crate::parser::parse_command;
use crate::session::{Flow, Session};

/// Runs the interactive shell until `exit`, Ctrl-C or Ctrl-D and returns the
/// exit code.
pub fn start_repl(config: &ShellConfig) -> anyhow::Result<i32> {
    let editor_config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to create line editor")?;
    let mut session = Session::new(config.history_window);
    rl.set_helper(Some(CommandCompleter::new(session.store_names())));

    loop {
        let line = match rl.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(0),
            Err(err) => anyhow::bail!("failed to read input: {}", err),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };
        debug!(?command, "running command");
        match session.run(command, &mut io::stdout().lock()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit(code)) => return Ok(code),
            Err(err) if err.kind() == ErrorKind::BrokenPipe => return Ok(0),
            Err(err) => return Err(err).context("failed to write output"),
        }

        if let Some(helper) = rl.helper() {
            *helper.store_names.borrow_mut() = session.store_names();
        }
    }
}
