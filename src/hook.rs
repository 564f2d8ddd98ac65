use std::io::Read;

use crate::config::Config;
use crate::error::NotifyError;
use crate::event::StopEvent;
use crate::line::LineClient;
use crate::{message, nlog};

/// `read → parse → validate env → format → send`, stopping at the first
/// failure. No HTTP client is even constructed until the event has parsed
/// and both credentials are present.
///
/// Parameterized over the input stream and the environment lookup so the
/// whole pipeline can be driven from tests; `main` passes stdin and
/// `std::env::var`. Writes nothing to stderr — reporting and the exit-code
/// mapping stay in `main`.
pub fn run(
    input: &mut impl Read,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), NotifyError> {
    run_against(input, lookup, None)
}

fn run_against(
    input: &mut impl Read,
    lookup: impl Fn(&str) -> Option<String>,
    base_url: Option<&str>,
) -> Result<(), NotifyError> {
    let mut raw = String::new();
    input.read_to_string(&mut raw)?;

    let event = StopEvent::parse(&raw)?;
    nlog!("stop event: status={}", event.status());

    let cfg = Config::from_lookup(lookup)?;

    let text = message::format_message(&event);
    let client = match base_url {
        Some(url) => LineClient::with_base_url(&cfg.access_token, url)?,
        None => LineClient::new(&cfg.access_token)?,
    };
    client.push_text(&cfg.user_id, &text)
}
