//! Relay tests against real child processes (`sh -c` scripts).
#![cfg(unix)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use immai_relay::{CommandRunner, RelayError, RelayService};

const MARKER: &str = "Answer from GPT-4o:";

fn sh(script: &str) -> CommandRunner {
    CommandRunner::new("sh", "TEST_QUERY").args(["-c", script])
}

fn relay_with(runner: CommandRunner) -> RelayService {
    RelayService::with_runner(Arc::new(runner), MARKER)
}

#[tokio::test]
async fn test_query_reaches_child_through_env() {
    let svc = relay_with(sh(
        r#"printf 'User question: %s\nAnswer from GPT-4o:\n\n  echoed: %s\n' "$TEST_QUERY" "$TEST_QUERY""#,
    ));

    let answer = svc.relay("Can I work on an F1 visa?").await.unwrap();
    assert_eq!(answer.answer, "echoed: Can I work on an F1 visa?");
}

#[tokio::test]
async fn test_shell_metacharacters_are_not_interpreted() {
    let svc = relay_with(sh(r#"printf '%s' "$TEST_QUERY""#));

    let query = "it's \"quoted\"; $(echo nope) `uname` && exit 3";
    let answer = svc.relay(query).await.unwrap();
    assert_eq!(answer.answer, query);
}

#[tokio::test]
async fn test_nonzero_exit_hides_stderr() {
    let svc = relay_with(sh("echo 'KeyError: PINECONE_API_KEY' >&2; exit 1"));

    let err = svc.relay("hello").await.unwrap_err();
    assert_eq!(err, RelayError::ProcessFailed);
    assert_eq!(err.to_string(), "Failed to process query");
}

#[tokio::test]
async fn test_large_output_is_fully_buffered() {
    // Enough to overflow a pipe buffer if stdout were not drained concurrently.
    let svc = relay_with(sh(
        "i=0; while [ $i -lt 20000 ]; do echo 'filler line for the pipe'; i=$((i+1)); done; \
         echo 'Answer from GPT-4o:'; echo 'done'",
    ));

    let answer = svc.relay("big").await.unwrap();
    assert_eq!(answer.answer, "done");
}

#[tokio::test]
async fn test_timeout_kills_hung_child() {
    let runner = sh("sleep 10; echo late").timeout(Duration::from_millis(200));
    let svc = relay_with(runner);

    let started = Instant::now();
    let err = svc.relay("hang").await.unwrap_err();
    assert_eq!(err, RelayError::ProcessFailed);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_concurrent_relays_are_independent() {
    let svc = relay_with(sh(r#"sleep 0.1; printf 'Answer from GPT-4o:\n%s' "$TEST_QUERY""#));

    let (a, b, c) = tokio::join!(svc.relay("alpha"), svc.relay("beta"), svc.relay("gamma"));
    assert_eq!(a.unwrap().answer, "alpha");
    assert_eq!(b.unwrap().answer, "beta");
    assert_eq!(c.unwrap().answer, "gamma");
}
