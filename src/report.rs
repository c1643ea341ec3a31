use std::process::ExitCode;

use crate::error::DispatchError;
use crate::types::DispatchOutcome;

pub fn render(result: &Result<DispatchOutcome, DispatchError>) -> String {
    match result {
        Ok(outcome) => format!("{}\n{}", outcome.status, outcome.body),
        Err(err @ DispatchError::Connection { .. }) => format!("Connection Error: {}", err),
        Err(err) => format!("An error occurred: {}", err),
    }
}

/// Failure if any dispatch did not complete. Error statuses from the server
/// still count as completed.
pub fn exit_code(results: &[Result<DispatchOutcome, DispatchError>]) -> ExitCode {
    if all_completed(results) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn all_completed(results: &[Result<DispatchOutcome, DispatchError>]) -> bool {
    results.iter().all(Result::is_ok)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ok(status: u16) -> Result<DispatchOutcome, DispatchError> {
        Ok(DispatchOutcome {
            status,
            body: json!({ "status": "sent" }),
        })
    }

    #[test]
    fn renders_status_then_body() {
        assert_eq!(render(&ok(200)), "200\n{\"status\":\"sent\"}");
    }

    #[test]
    fn renders_other_failure() {
        let err = Err(DispatchError::Other("bad body".into()));
        assert_eq!(render(&err), "An error occurred: bad body");
    }

    #[test]
    fn exit_status_follows_failures() {
        assert!(all_completed(&[ok(200), ok(500)]));
        assert!(!all_completed(&[
            ok(200),
            Err(DispatchError::Other("x".into()))
        ]));
        assert!(all_completed(&[]));
    }

    #[test]
    fn exit_code_maps_to_process_status() {
        let debug = |code: ExitCode| format!("{:?}", code);
        assert_eq!(
            debug(exit_code(&[ok(200), ok(500)])),
            debug(ExitCode::SUCCESS)
        );
        assert_eq!(
            debug(exit_code(&[Err(DispatchError::Other("x".into())), ok(200)])),
            debug(ExitCode::FAILURE)
        );
    }
}
