//! Share links
//!
//! Builds stable URLs for a resolved place and delivers them through
//! the best available channel. Sharing degrades rather than fails: when
//! no channel can deliver, the URL itself is the outcome.

use crate::error::Result;

/// Build the canonical share URL for a place id
///
/// With no origin the path alone is returned, which is still a valid
/// link relative to whatever host serves the app.
pub fn share_url(place_id: &str, origin: Option<&str>) -> String {
    let path = format!("/location/{}", urlencoding::encode(place_id));
    match origin {
        Some(origin) => format!("{}{}", origin.trim_end_matches('/'), path),
        None => path,
    }
}

/// Extract the place id back out of a share path
pub fn place_id_from_path(path: &str) -> Option<String> {
    let encoded = path.strip_prefix("/location/")?;
    if encoded.is_empty() {
        return None;
    }
    urlencoding::decode(encoded).ok().map(|s| s.into_owned())
}

/// How a share attempt concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// A channel accepted the URL
    Delivered { channel: String },
    /// No channel could take it; show the URL for manual copying
    Displayed { url: String },
}

/// One way of getting a URL to the user
pub trait ShareChannel {
    fn name(&self) -> &str;

    /// Whether the channel can be attempted at all right now
    fn is_available(&self) -> bool;

    fn deliver(&self, url: &str) -> Result<()>;
}

/// Try channels in order until one delivers
///
/// Unavailable channels are skipped and delivery errors move on to the
/// next channel. This never returns an error; exhausting the list
/// produces `Displayed`.
pub fn share_via(channels: &[&dyn ShareChannel], url: &str) -> ShareOutcome {
    for channel in channels {
        if !channel.is_available() {
            continue;
        }
        match channel.deliver(url) {
            Ok(()) => {
                return ShareOutcome::Delivered {
                    channel: channel.name().to_string(),
                }
            }
            Err(e) => {
                tracing::debug!("share channel {} failed: {}", channel.name(), e);
            }
        }
    }

    ShareOutcome::Displayed {
        url: url.to_string(),
    }
}

/// Channel that prints the URL to stdout
///
/// Always available; the terminal is the fallback of last resort for
/// the CLI.
#[derive(Debug, Default)]
pub struct StdoutChannel;

impl ShareChannel for StdoutChannel {
    fn name(&self) -> &str {
        "stdout"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn deliver(&self, url: &str) -> Result<()> {
        println!("{}", url);
        Ok(())
    }
}
