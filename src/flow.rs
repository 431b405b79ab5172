/// Save-and-auth flow: read the active tab, make sure the session is valid,
/// and post the page to the save-article endpoint.
use crate::config::PopupConfig;
use crate::error::{FlowError, Result};
use crate::platform::{Browser, HttpClient, HttpRequest, Sleeper, StatusView};
use crate::poll::LoginPoll;
use crate::status::Status;
use crate::tab_data::{TabDescriptor, SaveResult, cookie_header};
use std::cell::Cell;

/// How a flow operation ended
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    /// The article was stored and the popup has been closed.
    Saved,
    /// The login prompt is showing; the user has to act.
    LoginRequired,
    /// A login wait was already running; this call did nothing.
    LoginInProgress,
    /// Terminal for this popup invocation.
    Failed(FlowError),
}

/// Marks a login wait as running until dropped.
struct LoginGuard<'a>(&'a Cell<bool>);

impl Drop for LoginGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct SaveFlow<B, H, S, V> {
    config: PopupConfig,
    browser: B,
    http: H,
    sleeper: S,
    view: V,
    login_active: Cell<bool>,
}

impl<B, H, S, V> SaveFlow<B, H, S, V>
where
    B: Browser,
    H: HttpClient,
    S: Sleeper,
    V: StatusView,
{
    pub fn new(config: PopupConfig, browser: B, http: H, sleeper: S, view: V) -> Self {
        SaveFlow {
            config,
            browser,
            http,
            sleeper,
            view,
            login_active: Cell::new(false),
        }
    }

    /// Entry point, run once when the popup opens.
    pub async fn run(&self) -> FlowOutcome {
        let tab = match self.browser.active_tab().await {
            Ok(tab) => tab,
            Err(e) => {
                log::error!("Failed to read the active tab: {}", e);
                self.view.render(Status::error("An error occurred"));
                return FlowOutcome::Failed(e);
            }
        };

        self.view.show_page_title(tab.display_title());

        if !self.check_auth().await {
            self.show_login_required();
            return FlowOutcome::LoginRequired;
        }

        self.save(&tab).await
    }

    /// One auth-status probe. Never fails: any error counts as signed out.
    pub async fn check_auth(&self) -> bool {
        match self.probe_auth().await {
            Ok(authenticated) => authenticated,
            Err(e) => {
                log::warn!("Auth check failed, treating as signed out: {}", e);
                false
            }
        }
    }

    /// Auth-status probe that still reports failures of the probe itself.
    ///
    /// A failed fetch or a non-2xx status is `Ok(false)`; only a failure to
    /// read the session cookies is an error.
    pub async fn probe_auth(&self) -> Result<bool> {
        let cookies = self
            .session_cookie_header()
            .await
            .map_err(|e| FlowError::Auth(e.to_string()))?;

        let request = HttpRequest::get(self.config.auth_status_url()).with_session(cookies);

        match self.http.send(request).await {
            Ok(response) => {
                log::debug!("Auth status responded {}", response.status);
                Ok(response.is_success())
            }
            Err(e) => {
                log::warn!("Auth status request failed: {}", e);
                Ok(false)
            }
        }
    }

    /// Open the sign-in page, wait for the session to appear, then save
    /// whatever tab is active at that point.
    ///
    /// Only one login runs per flow; a call made while another is still
    /// waiting returns `LoginInProgress` without opening a tab.
    pub async fn login(&self) -> FlowOutcome {
        let Some(_guard) = self.begin_login() else {
            log::warn!("Login already in progress");
            return FlowOutcome::LoginInProgress;
        };

        self.view.render(Status::loading("Opening sign-in page..."));

        let signin_url = self.config.signin_url();
        let login_tab = match self.browser.create_tab(&signin_url).await {
            Ok(id) => id,
            Err(e) => {
                log::error!("Failed to open {}: {}", signin_url, e);
                self.view.render(Status::error("Sign-in failed"));
                return FlowOutcome::Failed(e);
            }
        };
        log::info!("Opened sign-in tab {}", login_tab);

        let mut poll = LoginPoll::new(self.config.poll_interval, self.config.max_poll_attempts);
        match poll.wait(&self.sleeper, || self.probe_auth()).await {
            Ok(()) => {}
            Err(e @ FlowError::Timeout { .. }) => {
                self.view.render(Status::error("Sign-in timed out"));
                return FlowOutcome::Failed(e);
            }
            Err(e) => {
                self.view.render(Status::error("Sign-in failed"));
                return FlowOutcome::Failed(e);
            }
        }

        // The user may have closed it already
        if let Err(e) = self.browser.remove_tab(login_tab).await {
            log::debug!("Sign-in tab {} already gone: {}", login_tab, e);
        }

        self.view.render(Status::success("Signed in!"));

        match self.browser.active_tab().await {
            Ok(tab) => self.save(&tab).await,
            Err(e) => {
                log::error!("Failed to read the active tab after sign-in: {}", e);
                self.view.render(Status::error("Sign-in failed"));
                FlowOutcome::Failed(e)
            }
        }
    }

    /// Post `tab` to the save-article endpoint and report the result.
    pub async fn save(&self, tab: &TabDescriptor) -> FlowOutcome {
        self.view.render(Status::loading("Saving article..."));

        match self.submit(tab).await {
            Ok(()) => {
                log::info!("Saved {}", tab.url);
                self.view.render(Status::success("Saved!"));
                self.sleeper.sleep(self.config.close_delay).await;
                self.browser.close_popup();
                FlowOutcome::Saved
            }
            Err(FlowError::Unauthorized) => {
                log::info!("Session expired while saving; asking for sign-in");
                self.show_login_required();
                FlowOutcome::LoginRequired
            }
            Err(e) => {
                log::error!("Save failed: {}", e);
                self.view.render(Status::error(e.save_failure_message()));
                FlowOutcome::Failed(e)
            }
        }
    }

    async fn submit(&self, tab: &TabDescriptor) -> Result<()> {
        let body = tab.save_request().to_json()?;
        let request =
            HttpRequest::post_json(self.config.save_article_url(), body).with_session(self.session_cookie_header().await?);

        let response = self.http.send(request).await?;
        if response.status == 401 {
            return Err(FlowError::Unauthorized);
        }

        let result = SaveResult::parse(&response.body);
        if !response.is_success() {
            // Prefer the backend's own explanation when the body has one
            return Err(match result {
                Ok(SaveResult { error: Some(msg), .. }) => FlowError::Validation {
                    message: format!("HTTP {}", response.status),
                    backend_message: Some(msg),
                },
                _ => FlowError::Network(format!("HTTP {}", response.status)),
            });
        }

        result?.into_result()
    }

    async fn session_cookie_header(&self) -> Result<String> {
        let cookies = self.browser.cookies(self.config.cookie_url()).await?;
        Ok(cookie_header(&cookies))
    }

    fn begin_login(&self) -> Option<LoginGuard<'_>> {
        if self.login_active.replace(true) {
            None
        } else {
            Some(LoginGuard(&self.login_active))
        }
    }

    fn show_login_required(&self) {
        self.view.render(Status::login_required());
    }
}
