//! FILENAME: core/navigation/src/policy.rs
//! PURPOSE: Decide whether a navigation stays in the window or goes to the
//! system browser.
//! CONTEXT: Exactly one remote origin is trusted. Bundled-asset origins are
//! always allowed. A load the shell itself started is trusted, redirects
//! included, until the webview reports it finished.

use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Outcome for a navigation or new-window request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Load inside the app window.
    Allow,
    /// Cancel in-window and hand the URL to the OS default browser.
    OpenExternal,
}

/// scheme + host + effective port, compared like a browser origin.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OriginKey {
    scheme: String,
    host: Option<String>,
    port: Option<u16>,
}

impl OriginKey {
    fn of(url: &Url) -> Self {
        Self {
            scheme: url.scheme().to_ascii_lowercase(),
            host: url.host_str().map(|h| h.to_ascii_lowercase()),
            port: url.port_or_known_default(),
        }
    }
}

/// A load requested by the shell. `started` flips once the webview reports
/// the first hop to the requested origin; every hop after that belongs to the
/// same load (server redirects) until it finishes.
#[derive(Debug, Clone)]
struct ShellLoad {
    origin: OriginKey,
    started: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationPolicy {
    allowed: OriginKey,
    internal: Vec<OriginKey>,
    pending: Option<ShellLoad>,
}

fn parse(url: &str) -> Result<Url, NavigationError> {
    Url::parse(url).map_err(|source| NavigationError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

impl NavigationPolicy {
    pub fn new(allowed_origin: &str) -> Result<Self, NavigationError> {
        Ok(Self {
            allowed: OriginKey::of(&parse(allowed_origin)?),
            internal: Vec::new(),
            pending: None,
        })
    }

    /// Add an origin serving bundled assets (the local index page).
    pub fn with_internal_origin(mut self, url: &str) -> Result<Self, NavigationError> {
        self.internal.push(OriginKey::of(&parse(url)?));
        Ok(self)
    }

    /// Record a load started by the shell (startup or a menu action),
    /// replacing any earlier one.
    pub fn expect(&mut self, url: &Url) {
        self.pending = Some(ShellLoad {
            origin: OriginKey::of(url),
            started: false,
        });
    }

    /// The webview finished loading a page. Navigations after this fall back
    /// to the origin rule.
    pub fn finish_load(&mut self) {
        self.pending = None;
    }

    /// Decision for an in-window navigation. Unparsable targets go external.
    pub fn decide(&mut self, target: &str) -> NavigationDecision {
        match Url::parse(target) {
            Ok(url) => self.decide_url(&url),
            Err(e) => {
                log::warn!(target: "navigation", "unparsable navigation target {:?}: {}", target, e);
                NavigationDecision::OpenExternal
            }
        }
    }

    pub fn decide_url(&mut self, target: &Url) -> NavigationDecision {
        let key = OriginKey::of(target);

        if let Some(load) = self.pending.as_mut() {
            if load.started {
                log::debug!(target: "navigation", "redirect within shell load to {}", target);
                return NavigationDecision::Allow;
            }
            if load.origin == key {
                load.started = true;
                return NavigationDecision::Allow;
            }
        }

        if key == self.allowed || self.internal.contains(&key) {
            return NavigationDecision::Allow;
        }
        NavigationDecision::OpenExternal
    }

    /// Pages never get extra windows; every popup goes to the browser.
    pub fn decide_new_window(&self, _target: &Url) -> NavigationDecision {
        NavigationDecision::OpenExternal
    }
}
