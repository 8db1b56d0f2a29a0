//! Portal session: the authentication gate
//!
//! 状态机：
//!
//! ```text
//!  LoggedOut ──begin_submit──▶ Authenticating ──complete_submit(Ok)──▶ LoggedIn
//!      ▲                            │                                     │
//!      └──── complete_submit(Err) ──┤                                     │
//!      └──── cancel_pending ────────┘                                     │
//!      └──────────────────────────────── logout ──────────────────────────┘
//! ```
//!
//! Only one verification may be in flight. The verifier call itself lives in
//! [`PendingVerification`], so the UI thread can keep rendering `Authenticating`
//! while the runtime drives the call, then hand the outcome back.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{PortalError, PortalResult};
use crate::traits::CredentialVerifier;
use crate::types::{Identity, SessionStatus};

/// Identifies one sign-in attempt within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttemptId(u64);

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    LoggedOut { last_error: Option<String> },
    Authenticating { attempt: AttemptId },
    LoggedIn { identity: Identity },
}

/// Result of a finished verification, to be applied with [`PortalSession::complete_submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub attempt: AttemptId,
    pub result: PortalResult<Identity>,
}

/// A verification that has been admitted but not yet run
///
/// `run` is `Send + 'static` so it can be spawned onto a runtime.
pub struct PendingVerification {
    attempt: AttemptId,
    username: String,
    password: String,
    verifier: Arc<dyn CredentialVerifier>,
    timeout: Duration,
}

impl PendingVerification {
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    /// Call the verifier, bounded by the session timeout
    pub async fn run(self) -> VerificationOutcome {
        let call = self.verifier.verify(&self.username, &self.password);

        let result = match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(identity)) => Ok(identity),
            Ok(Err(e)) => Err(PortalError::from(e)),
            Err(_) => Err(PortalError::VerificationTimeout),
        };

        VerificationOutcome {
            attempt: self.attempt,
            result,
        }
    }
}

impl fmt::Debug for PendingVerification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingVerification")
            .field("attempt", &self.attempt)
            .field("username", &self.username)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Authentication state machine
///
/// Always starts in `LoggedOut`; nothing is persisted.
pub struct PortalSession {
    state: SessionState,
    verifier: Arc<dyn CredentialVerifier>,
    timeout: Duration,
    last_attempt: u64,
}

impl PortalSession {
    #[must_use]
    pub fn new(verifier: Arc<dyn CredentialVerifier>, timeout: Duration) -> Self {
        Self {
            state: SessionState::LoggedOut { last_error: None },
            verifier,
            timeout,
            last_attempt: 0,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::LoggedOut { .. } => SessionStatus::LoggedOut,
            SessionState::Authenticating { .. } => SessionStatus::Authenticating,
            SessionState::LoggedIn { .. } => SessionStatus::LoggedIn,
        }
    }

    /// Present iff the status is `LoggedIn`
    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::LoggedIn { identity } => Some(identity),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            SessionState::LoggedOut { last_error } => last_error.as_deref(),
            _ => None,
        }
    }

    /// The attempt currently in flight
    pub fn pending_attempt(&self) -> Option<AttemptId> {
        match self.state {
            SessionState::Authenticating { attempt } => Some(attempt),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending_attempt().is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Admit a sign-in attempt and move to `Authenticating`
    ///
    /// Rejected without any state change while another attempt is in flight or a
    /// user is signed in. A blank username fails immediately without calling the
    /// verifier.
    pub fn begin_submit(
        &mut self,
        username: &str,
        password: &str,
    ) -> PortalResult<PendingVerification> {
        match &self.state {
            SessionState::Authenticating { attempt } => {
                log::debug!("Sign-in rejected, attempt {attempt} still in flight");
                return Err(PortalError::VerificationInProgress);
            }
            SessionState::LoggedIn { .. } => return Err(PortalError::AlreadyLoggedIn),
            SessionState::LoggedOut { .. } => {}
        }

        let username = username.trim();
        if username.is_empty() {
            let err = PortalError::EmptyUsername;
            self.state = SessionState::LoggedOut {
                last_error: Some(err.to_string()),
            };
            return Err(err);
        }

        self.last_attempt += 1;
        let attempt = AttemptId(self.last_attempt);
        self.state = SessionState::Authenticating { attempt };
        log::info!("Sign-in attempt {attempt} started for '{username}'");

        Ok(PendingVerification {
            attempt,
            username: username.to_string(),
            password: password.to_string(),
            verifier: Arc::clone(&self.verifier),
            timeout: self.timeout,
        })
    }

    /// Apply a finished verification
    ///
    /// Returns `false` when the outcome does not belong to the attempt in flight
    /// (cancelled or stale); the state is then left untouched.
    pub fn complete_submit(&mut self, outcome: VerificationOutcome) -> bool {
        let SessionState::Authenticating { attempt } = self.state else {
            log::debug!("Ignoring outcome of attempt {}, nothing in flight", outcome.attempt);
            return false;
        };
        if attempt != outcome.attempt {
            log::debug!(
                "Ignoring stale outcome of attempt {}, current is {attempt}",
                outcome.attempt
            );
            return false;
        }

        match outcome.result {
            Ok(identity) => {
                log::info!(
                    "Attempt {attempt} succeeded, signed in as {} ({})",
                    identity.display_name,
                    identity.role
                );
                self.state = SessionState::LoggedIn { identity };
            }
            Err(err) => {
                if err.is_expected() {
                    log::warn!("Attempt {attempt} failed: {err}");
                } else {
                    log::error!("Attempt {attempt} failed: {err}");
                }
                self.state = SessionState::LoggedOut {
                    last_error: Some(err.to_string()),
                };
            }
        }
        true
    }

    /// Abandon the attempt in flight (navigated away from the login surface)
    pub fn cancel_pending(&mut self) -> bool {
        let SessionState::Authenticating { attempt } = self.state else {
            return false;
        };
        log::info!("Sign-in attempt {attempt} cancelled");
        self.state = SessionState::LoggedOut { last_error: None };
        true
    }

    /// begin → run → complete in one call
    ///
    /// Dropping the returned future before it finishes cancels the attempt, so the
    /// session falls back to `LoggedOut` instead of staying `Authenticating`.
    pub async fn submit(&mut self, username: &str, password: &str) -> PortalResult<()> {
        let pending = self.begin_submit(username, password)?;
        let mut guard = CancelOnDrop { session: self };
        let outcome = pending.run().await;
        let result = outcome.result.clone().map(|_| ());
        guard.session.complete_submit(outcome);
        result
    }

    /// Sign out; a no-op unless signed in
    pub fn logout(&mut self) -> bool {
        let SessionState::LoggedIn { identity } = &self.state else {
            return false;
        };
        log::info!("{} signed out", identity.display_name);
        self.state = SessionState::LoggedOut { last_error: None };
        true
    }
}

/// 持有进行中的 `submit`；future 被提前丢弃时取消该次尝试
struct CancelOnDrop<'a> {
    session: &'a mut PortalSession,
}

impl Drop for CancelOnDrop<'_> {
    fn drop(&mut self) {
        // 正常完成后已不在 Authenticating，这里是空操作
        self.session.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockCredentialVerifier;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn session_with(verifier: &Arc<MockCredentialVerifier>) -> PortalSession {
        PortalSession::new(verifier.clone(), TIMEOUT)
    }

    fn assert_identity_invariant(session: &PortalSession) {
        assert_eq!(
            session.identity().is_some(),
            session.status() == SessionStatus::LoggedIn,
            "identity presence must match LoggedIn status"
        );
    }

    #[test]
    fn starts_logged_out() {
        let session = session_with(&Arc::new(MockCredentialVerifier::accepting("admin", "admin")));
        assert_eq!(session.status(), SessionStatus::LoggedOut);
        assert!(session.identity().is_none());
        assert!(session.last_error().is_none());
    }

    #[tokio::test]
    async fn valid_credentials_sign_in() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut session = session_with(&verifier);

        let pending = session.begin_submit("admin", "admin").unwrap();
        assert_eq!(session.status(), SessionStatus::Authenticating);

        let outcome = pending.run().await;
        assert!(session.complete_submit(outcome));

        assert_eq!(session.status(), SessionStatus::LoggedIn);
        assert_eq!(session.identity().unwrap().display_name, "Admin User");
        assert!(session.last_error().is_none());
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test]
    async fn wrong_password_returns_to_logged_out_with_message() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut session = session_with(&verifier);

        let pending = session.begin_submit("admin", "wrong").unwrap();
        assert_eq!(session.status(), SessionStatus::Authenticating);
        session.complete_submit(pending.run().await);

        assert_eq!(session.status(), SessionStatus::LoggedOut);
        assert!(session.identity().is_none());
        assert!(!session.last_error().unwrap().is_empty());
    }

    #[tokio::test]
    async fn new_attempt_clears_previous_error() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut session = session_with(&verifier);

        assert!(session.submit("admin", "wrong").await.is_err());
        assert!(session.last_error().is_some());

        let _pending = session.begin_submit("admin", "admin").unwrap();
        assert!(session.last_error().is_none());
    }

    #[tokio::test]
    async fn second_submit_while_authenticating_is_rejected() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut session = session_with(&verifier);

        let first = session.begin_submit("admin", "admin").unwrap();
        let attempt = session.pending_attempt();

        assert_eq!(
            session.begin_submit("admin", "admin").unwrap_err(),
            PortalError::VerificationInProgress
        );
        assert_eq!(session.pending_attempt(), attempt);

        session.complete_submit(first.run().await);
        assert_eq!(verifier.calls(), 1);
        assert_eq!(session.status(), SessionStatus::LoggedIn);
    }

    #[tokio::test]
    async fn submit_while_logged_in_is_rejected() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut session = session_with(&verifier);
        session.submit("admin", "admin").await.unwrap();

        assert_eq!(
            session.submit("admin", "admin").await,
            Err(PortalError::AlreadyLoggedIn)
        );
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test]
    async fn blank_username_never_reaches_verifier() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut session = session_with(&verifier);

        assert_eq!(
            session.submit("   ", "admin").await,
            Err(PortalError::EmptyUsername)
        );
        assert_eq!(session.status(), SessionStatus::LoggedOut);
        assert!(session.last_error().is_some());
        assert_eq!(verifier.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_submit_cancels_the_attempt() {
        let verifier = Arc::new(
            MockCredentialVerifier::accepting("admin", "admin").with_delay(Duration::from_secs(2)),
        );
        let mut session = session_with(&verifier);

        let abandoned =
            tokio::time::timeout(Duration::from_secs(1), session.submit("admin", "admin")).await;
        assert!(abandoned.is_err());

        assert_eq!(session.status(), SessionStatus::LoggedOut);
        assert!(session.last_error().is_none());
        assert_identity_invariant(&session);

        // 重试不会被 VerificationInProgress 拒绝
        session.submit("admin", "admin").await.unwrap();
        assert_eq!(session.status(), SessionStatus::LoggedIn);
        assert_eq!(verifier.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_verifier_times_out() {
        let verifier = Arc::new(
            MockCredentialVerifier::accepting("admin", "admin").with_delay(Duration::from_secs(60)),
        );
        let mut session = session_with(&verifier);

        assert_eq!(
            session.submit("admin", "admin").await,
            Err(PortalError::VerificationTimeout)
        );
        assert_eq!(session.status(), SessionStatus::LoggedOut);
        assert_eq!(
            session.last_error(),
            Some(PortalError::VerificationTimeout.to_string().as_str())
        );
    }

    #[tokio::test]
    async fn unavailable_verifier_has_distinct_message() {
        let verifier = Arc::new(MockCredentialVerifier::unavailable("connection refused"));
        let mut session = session_with(&verifier);

        session.submit("admin", "admin").await.unwrap_err();
        let unavailable = session.last_error().unwrap().to_string();

        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut other = session_with(&verifier);
        other.submit("admin", "wrong").await.unwrap_err();

        assert_ne!(unavailable, other.last_error().unwrap());
        assert_eq!(session.status(), SessionStatus::LoggedOut);
    }

    #[tokio::test]
    async fn cancelled_attempt_ignores_late_outcome() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut session = session_with(&verifier);

        let pending = session.begin_submit("admin", "admin").unwrap();
        assert!(session.cancel_pending());
        assert_eq!(session.status(), SessionStatus::LoggedOut);
        assert!(session.last_error().is_none());

        assert!(!session.complete_submit(pending.run().await));
        assert_eq!(session.status(), SessionStatus::LoggedOut);
    }

    #[tokio::test]
    async fn stale_outcome_does_not_hijack_newer_attempt() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut session = session_with(&verifier);

        let stale = session.begin_submit("admin", "admin").unwrap();
        session.cancel_pending();
        let _current = session.begin_submit("admin", "wrong").unwrap();

        assert!(!session.complete_submit(stale.run().await));
        assert_eq!(session.status(), SessionStatus::Authenticating);
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut session = session_with(&verifier);
        session.submit("admin", "admin").await.unwrap();

        assert!(session.logout());
        let after_once = (session.status(), session.last_error().map(str::to_string));
        assert!(!session.logout());
        let after_twice = (session.status(), session.last_error().map(str::to_string));

        assert_eq!(after_once, after_twice);
        assert_eq!(session.status(), SessionStatus::LoggedOut);
        assert!(session.identity().is_none());
    }

    #[test]
    fn logout_while_authenticating_keeps_attempt() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let mut session = session_with(&verifier);
        let _pending = session.begin_submit("admin", "admin").unwrap();

        assert!(!session.logout());
        assert_eq!(session.status(), SessionStatus::Authenticating);
    }

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Begin,
        BeginBlank,
        ResolveOk,
        ResolveErr,
        ResolveStale,
        Cancel,
        Logout,
    }

    const STEPS: [Step; 7] = [
        Step::Begin,
        Step::BeginBlank,
        Step::ResolveOk,
        Step::ResolveErr,
        Step::ResolveStale,
        Step::Cancel,
        Step::Logout,
    ];

    fn apply(session: &mut PortalSession, step: Step) {
        let current = session.pending_attempt().unwrap_or(AttemptId(0));
        match step {
            Step::Begin => {
                let _ = session.begin_submit("admin", "admin");
            }
            Step::BeginBlank => {
                let _ = session.begin_submit("", "admin");
            }
            Step::ResolveOk => {
                session.complete_submit(VerificationOutcome {
                    attempt: current,
                    result: Ok(Identity::new("Admin User", "Admin")),
                });
            }
            Step::ResolveErr => {
                session.complete_submit(VerificationOutcome {
                    attempt: current,
                    result: Err(PortalError::InvalidCredentials),
                });
            }
            Step::ResolveStale => {
                session.complete_submit(VerificationOutcome {
                    attempt: AttemptId(u64::MAX),
                    result: Ok(Identity::new("Intruder", "None")),
                });
            }
            Step::Cancel => {
                session.cancel_pending();
            }
            Step::Logout => {
                session.logout();
            }
        }
    }

    #[test]
    fn identity_invariant_holds_for_every_sequence() {
        let verifier = Arc::new(MockCredentialVerifier::accepting("admin", "admin"));
        let len = STEPS.len();

        for code in 0..len.pow(4) {
            let mut session = session_with(&verifier);
            let mut rest = code;
            for _ in 0..4 {
                apply(&mut session, STEPS[rest % len]);
                rest /= len;
                assert_identity_invariant(&session);
                if session.status() != SessionStatus::LoggedOut {
                    assert!(session.last_error().is_none());
                }
            }
            assert_ne!(
                session.identity().map(|i| i.display_name.as_str()),
                Some("Intruder")
            );
        }
    }
}
