#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use taskman::api::{ApiError, AuthApi, Credentials, LoginResponse, Session, MAX_RETRY_COUNT};
    use taskman::libs::config::ServerConfig;
    use taskman::libs::secret::Secret;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct SessionTestContext {
        temp_dir: TempDir,
        server: MockServer,
    }

    impl SessionTestContext {
        fn token_store(&self) -> Secret {
            Secret::at(self.temp_dir.path().join(".token"))
        }

        fn auth(&self) -> AuthApi {
            AuthApi::new(&ServerConfig::new(self.server.uri()))
                .unwrap()
                .with_token_store(self.token_store())
        }
    }

    impl AsyncTestContext for SessionTestContext {
        async fn setup() -> Self {
            SessionTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                server: MockServer::start().await,
            }
        }
    }

    #[derive(Clone, Copy, PartialEq)]
    enum LoginOutcome {
        Accept,
        Reject,
        Unreachable,
    }

    /// Session double: fixed verification answer and login outcome, counted calls.
    struct MockSession {
        token_store: Secret,
        token_valid: bool,
        outcome: LoginOutcome,
        prompts: AtomicUsize,
        logins: AtomicUsize,
    }

    impl MockSession {
        fn new(token_store: Secret, token_valid: bool, outcome: LoginOutcome) -> Self {
            Self {
                token_store,
                token_valid,
                outcome,
                prompts: AtomicUsize::new(0),
                logins: AtomicUsize::new(0),
            }
        }
    }

    impl Session for MockSession {
        async fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
            self.logins.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                LoginOutcome::Accept => Ok(LoginResponse {
                    message: "Login successful".to_string(),
                    token: format!("fresh-token-for-{}", credentials.email),
                    user: None,
                }),
                LoginOutcome::Reject => Err(ApiError::Unauthorized),
                // Any error that is not a rejection takes the transport path.
                LoginOutcome::Unreachable => Err(ApiError::MissingId),
            }
        }

        async fn verify_token(&self, _token: &str) -> bool {
            self.token_valid
        }

        fn credentials(&self, _retry: i32) -> Result<Credentials> {
            self.prompts.fetch_add(1, Ordering::SeqCst);
            Ok(Credentials::new("user@example.com", "secret"))
        }

        fn token_store(&self) -> &Secret {
            &self.token_store
        }
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_cached_token_is_reused_when_valid(ctx: &mut SessionTestContext) {
        let store = ctx.token_store();
        store.store("cached-token").unwrap();
        let session = MockSession::new(store, true, LoginOutcome::Accept);

        assert_eq!(session.get_token().await.unwrap(), "cached-token");
        assert_eq!(session.prompts.load(Ordering::SeqCst), 0);
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_expired_token_is_replaced(ctx: &mut SessionTestContext) {
        let store = ctx.token_store();
        store.store("stale-token").unwrap();
        let session = MockSession::new(store, false, LoginOutcome::Accept);

        let token = session.get_token().await.unwrap();

        assert_eq!(token, "fresh-token-for-user@example.com");
        assert_eq!(session.token_store().load().unwrap(), token);
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_missing_token_triggers_login(ctx: &mut SessionTestContext) {
        let session = MockSession::new(ctx.token_store(), true, LoginOutcome::Accept);

        session.get_token().await.unwrap();

        assert_eq!(session.logins.load(Ordering::SeqCst), 1);
        assert!(session.token_store().exists());
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_rejected_logins_stop_after_retry_limit(ctx: &mut SessionTestContext) {
        let session = MockSession::new(ctx.token_store(), false, LoginOutcome::Reject);

        assert!(session.get_token().await.is_err());
        assert_eq!(session.logins.load(Ordering::SeqCst), MAX_RETRY_COUNT as usize + 1);
        assert!(!session.token_store().exists());
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_transport_failure_is_not_retried(ctx: &mut SessionTestContext) {
        let session = MockSession::new(ctx.token_store(), false, LoginOutcome::Unreachable);

        assert!(session.sign_in().await.is_err());
        assert_eq!(session.logins.load(Ordering::SeqCst), 1);
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_logout_forgets_token(ctx: &mut SessionTestContext) {
        let store = ctx.token_store();
        store.store("cached-token").unwrap();
        let session = MockSession::new(store, true, LoginOutcome::Accept);

        session.logout().unwrap();
        assert!(!session.token_store().exists());
        // A second logout has nothing to remove.
        session.logout().unwrap();
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_login_posts_credentials(ctx: &mut SessionTestContext) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({ "email": "ann@example.com", "password": "pw" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "token": "jwt-1",
                "user": { "id": "u1", "name": "Ann", "email": "ann@example.com" }
            })))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let response = ctx
            .auth()
            .login(&Credentials::new("ann@example.com", "pw"))
            .await
            .unwrap();

        assert_eq!(response.token, "jwt-1");
        assert_eq!(
            response.user.and_then(|user| user.email).as_deref(),
            Some("ann@example.com")
        );
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_wrong_password_is_a_rejection(ctx: &mut SessionTestContext) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })))
            .mount(&ctx.server)
            .await;

        let err = ctx
            .auth()
            .login(&Credentials::new("ann@example.com", "nope"))
            .await
            .unwrap_err();

        assert!(err.is_rejection());
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_register_stores_token(ctx: &mut SessionTestContext) {
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(json!({ "name": "Ann", "email": "ann@example.com", "password": "pw" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "User registered",
                "token": "jwt-new"
            })))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let auth = ctx.auth();
        auth.register_and_store("Ann", "ann@example.com", "pw").await.unwrap();

        assert_eq!(ctx.token_store().load().unwrap(), "jwt-new");
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_verify_token(ctx: &mut SessionTestContext) {
        Mock::given(method("GET"))
            .and(path("/auth/verify-token"))
            .and(header("authorization", "Bearer good"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&ctx.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/auth/verify-token"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&ctx.server)
            .await;

        let auth = ctx.auth();
        assert!(auth.verify("good").await);
        assert!(!auth.verify("bad").await);
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn test_get_token_over_http_uses_verified_cache(ctx: &mut SessionTestContext) {
        Mock::given(method("GET"))
            .and(path("/auth/verify-token"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&ctx.server)
            .await;
        ctx.token_store().store("jwt-cached").unwrap();

        assert_eq!(ctx.auth().get_token().await.unwrap(), "jwt-cached");
    }
}
