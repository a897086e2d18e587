use std::io::IsTerminal;

use dialoguer::Confirm as ConfirmPrompt;

use csv_remove_users::{Confirm, ConfigError};

/// Checks if stdin and stderr are connected to a terminal. dialoguer draws
/// its prompt on stderr, so stdout may be redirected.
pub fn is_interactive_terminal() -> bool {
    can_prompt(std::io::stdin().is_terminal(), std::io::stderr().is_terminal())
}

fn can_prompt(stdin_tty: bool, stderr_tty: bool) -> bool {
    stdin_tty && stderr_tty
}

/// Asks the operator on the terminal. Refuses to block when there is no
/// terminal to ask on.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool, ConfigError> {
        if !is_interactive_terminal() {
            return Err(ConfigError::NonInteractive);
        }
        ConfirmPrompt::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| {
                tracing::debug!("Confirmation prompt failed: {}", e);
                ConfigError::Declined
            })
    }
}
