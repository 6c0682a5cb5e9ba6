use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tokio::time;
use url::Url;

use crate::Stage;

/// Where deep links land when no client base is configured.
pub const DEFAULT_CLIENT_BASE: &str = "https://app.hubzz.com";

/// The custom scheme the installed client registers on mobile devices.
const CUSTOM_SCHEME_BASE: &str = "hubzz://join";

/// How long the custom scheme gets before the web fallback loads.
pub const WEB_FALLBACK_DELAY: Duration = Duration::from_secs(1);

lazy_static! {
    static ref MOBILE_AGENT_REGEX: Regex = Regex::new(r"(?i)iphone|ipad|android").unwrap();
}

#[derive(Debug, Error)]
pub enum DeepLinkError {
    #[error("Client base URL is invalid: {0}")]
    InvalidBase(String),
}

/// Navigation capabilities of an interactive client context.
///
/// The core never probes its execution context. A caller that can navigate
/// passes an implementation in, everyone else gets a no-op opener.
pub trait Navigator {
    /// Replaces the current browsing context with the given URL.
    fn navigate(&self, url: &str);

    /// Opens the URL in a new, unreferenced browsing context.
    fn open_in_new_context(&self, url: &str);
}

/// Builds the canonical deep link into the client for a stage.
///
/// The query parameter order is part of the link's identity. Callers compare
/// and cache these links, so it must never change:
/// `zone`, `venue`, `x`, `y`, `z`, then `token` when present.
pub fn generate_deep_link(
    stage: &Stage,
    base: &str,
    token: Option<&str>,
) -> Result<String, DeepLinkError> {
    let join_url = format!("{}/join", base.trim_end_matches('/'));
    let mut url = Url::parse(&join_url).map_err(|e| DeepLinkError::InvalidBase(e.to_string()))?;

    {
        let mut query = url.query_pairs_mut();

        query.append_pair("zone", &stage.zone_id);
        query.append_pair("venue", &stage.venue_module_id);
        query.append_pair("x", &stage.venue_coordinates.x.to_string());
        query.append_pair("y", &stage.venue_coordinates.y.to_string());
        query.append_pair("z", &stage.venue_coordinates.z.to_string());

        if let Some(token) = token {
            query.append_pair("token", token);
        }
    }

    Ok(url.into())
}

/// Rewrites a canonical deep link onto the custom scheme, keeping the query.
pub fn custom_scheme_variant(deep_link: &str) -> String {
    let query = deep_link.split_once('?').map(|(_, query)| query).unwrap_or_default();

    format!("{}?{}", CUSTOM_SCHEME_BASE, query)
}

/// Performs best-effort navigation to a deep link.
///
/// On a mobile user agent the custom scheme is tried first, and because it
/// gives no signal on whether the installed client picked it up, the web
/// link is loaded unconditionally after [`WEB_FALLBACK_DELAY`]. Desktop
/// agents get the web link in a new context right away. Without a
/// [`Navigator`] this does nothing.
pub async fn open_deep_link(deep_link: &str, user_agent: &str, navigator: Option<&dyn Navigator>) {
    let Some(navigator) = navigator else {
        return;
    };

    if MOBILE_AGENT_REGEX.is_match(user_agent) {
        navigator.navigate(&custom_scheme_variant(deep_link));

        time::sleep(WEB_FALLBACK_DELAY).await;
        navigator.navigate(deep_link);
    } else {
        navigator.open_in_new_context(deep_link);
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use super::{custom_scheme_variant, generate_deep_link, open_deep_link, Navigator, DEFAULT_CLIENT_BASE};
    use crate::{Stage, StreamType, VenueCoordinates};

    fn stage() -> Stage {
        Stage {
            id: "stage-main".to_string(),
            name: "Main Stage".to_string(),
            venue_module_id: "v1".to_string(),
            zone_id: "z1".to_string(),
            stream_type: StreamType::Spatial,
            external_stream_url: None,
            deep_link: String::new(),
            venue_coordinates: VenueCoordinates { x: 1.0, y: 2.0, z: 3.0 },
            priority: None,
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        calls: Mutex<Vec<(&'static str, String)>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.calls.lock().unwrap().push(("navigate", url.to_string()));
        }

        fn open_in_new_context(&self, url: &str) {
            self.calls.lock().unwrap().push(("new-context", url.to_string()));
        }
    }

    #[test]
    fn test_parameter_order_is_stable() {
        let link = generate_deep_link(&stage(), DEFAULT_CLIENT_BASE, None).unwrap();

        assert_eq!(link, "https://app.hubzz.com/join?zone=z1&venue=v1&x=1&y=2&z=3");
    }

    #[test]
    fn test_token_is_appended_last() {
        let link = generate_deep_link(&stage(), "https://staging.hubzz.com/", Some("vip 42")).unwrap();

        assert_eq!(
            link,
            "https://staging.hubzz.com/join?zone=z1&venue=v1&x=1&y=2&z=3&token=vip+42"
        );
    }

    #[test]
    fn test_custom_scheme_keeps_the_query() {
        let link = generate_deep_link(&stage(), DEFAULT_CLIENT_BASE, None).unwrap();

        assert_eq!(
            custom_scheme_variant(&link),
            "hubzz://join?zone=z1&venue=v1&x=1&y=2&z=3"
        );
    }

    #[tokio::test]
    async fn test_desktop_opens_new_context() {
        let navigator = RecordingNavigator::default();
        let link = generate_deep_link(&stage(), DEFAULT_CLIENT_BASE, None).unwrap();

        open_deep_link(&link, "Mozilla/5.0 (X11; Linux x86_64)", Some(&navigator)).await;

        let calls = navigator.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "new-context");
        assert_eq!(calls[0].1, link);
    }

    #[tokio::test]
    async fn test_mobile_falls_back_to_the_web_link() {
        let navigator = RecordingNavigator::default();
        let link = generate_deep_link(&stage(), DEFAULT_CLIENT_BASE, None).unwrap();

        open_deep_link(&link, "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)", Some(&navigator)).await;

        let calls = navigator.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1, "hubzz://join?zone=z1&venue=v1&x=1&y=2&z=3");
        assert_eq!(calls[1].1, link);
    }

    #[tokio::test]
    async fn test_no_navigator_is_a_no_op() {
        let link = generate_deep_link(&stage(), DEFAULT_CLIENT_BASE, None).unwrap();

        // Must return without panicking or sleeping forever
        open_deep_link(&link, "Mozilla/5.0 (iPhone)", None).await;
    }
}
