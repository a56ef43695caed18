//! Terminal UI components (spinner, colors, prompt handling).

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

// Ctrl+C and Escape both leave the current prompt.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Maps a cancelled prompt to `Ok(None)`.
///
/// Used by the chat session, where leaving the language picker or the
/// input line ends the session instead of failing it.
pub fn cancelled_as_none<T>(answer: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_prompt_cancelled(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Runs an interactive flow, treating cancellation as a clean exit.
///
/// If the user cancels a prompt (Ctrl+C or Escape), prints a newline to
/// clean up the terminal and returns `Ok(())`; nothing after the cancelled
/// prompt runs.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        result => result,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::widget::Language;
    use tempfile::TempDir;

    #[test]
    fn test_language_answer_passes_through() {
        let answer = cancelled_as_none(Ok(Language::Ja)).unwrap();
        assert_eq!(answer, Some(Language::Ja));
    }

    #[test]
    fn test_cancelled_language_picker_ends_quietly() {
        let escaped: Result<Language, _> = Err(InquireError::OperationCanceled);
        let interrupted: Result<Language, _> = Err(InquireError::OperationInterrupted);

        assert_eq!(cancelled_as_none(escaped).unwrap(), None);
        assert_eq!(cancelled_as_none(interrupted).unwrap(), None);
    }

    #[test]
    fn test_broken_terminal_is_still_an_error() {
        let answer: Result<String, _> = Err(InquireError::NotTTY);
        assert!(matches!(cancelled_as_none(answer), Err(InquireError::NotTTY)));
    }

    #[test]
    fn test_cancelled_configure_flow_saves_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let result = handle_prompt_cancellation(|| {
            let endpoint = Err::<String, _>(InquireError::OperationCanceled)?;
            crate::fs::atomic_write(&config_path, &endpoint)
        });

        assert!(result.is_ok());
        assert!(!config_path.exists());
    }

    #[test]
    fn test_configure_flow_errors_propagate() {
        let result = handle_prompt_cancellation(|| anyhow::bail!("Endpoint cannot be empty"));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Endpoint cannot be empty"));
    }
}
