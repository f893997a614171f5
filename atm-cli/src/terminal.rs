use dialoguer::{Input, Password, Select};

use crate::error::ShellError;
use crate::shell::{Action, Prompt};

/// [Prompt] backed by interactive terminal widgets
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn select(&mut self, title: &str, actions: &[Action]) -> Result<Option<Action>, ShellError> {
        let index = Select::new()
            .with_prompt(title)
            .items(actions)
            .default(0)
            .interact_opt()?;
        Ok(index.and_then(|i| actions.get(i).copied()))
    }

    fn input(&mut self, message: &str, secret: bool) -> Result<Option<String>, ShellError> {
        let text = if secret {
            Password::new()
                .with_prompt(message)
                .allow_empty_password(true)
                .interact()?
        } else {
            Input::<String>::new()
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()?
        };
        Ok(Some(text.trim().to_string()))
    }

    fn notify(&mut self, message: &str) -> Result<(), ShellError> {
        println!("{}", message);
        Ok(())
    }
}
