#[cfg(test)]
mod tests {
    use okr::api::{OkrClient, Session};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct SessionTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
        token: String,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            SessionTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
                token: "session-token-123".to_string(),
            }
        }
    }

    /// Session that only names its token file.
    struct MockSession {
        file: String,
    }

    impl Session for MockSession {
        fn token_file(&self) -> &str {
            &self.file
        }
    }

    fn mock() -> MockSession {
        MockSession {
            file: ".mock_token".to_string(),
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_no_token_initially(_ctx: &mut SessionTestContext) {
        assert_eq!(mock().load_token(), None);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_store_and_load_token(ctx: &mut SessionTestContext) {
        let session = mock();
        session.store_token(&ctx.token).unwrap();
        assert_eq!(session.load_token(), Some(ctx.token.clone()));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_empty_token_counts_as_missing(_ctx: &mut SessionTestContext) {
        let session = mock();
        session.store_token("").unwrap();
        assert_eq!(session.load_token(), None);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_clear_token(ctx: &mut SessionTestContext) {
        let session = mock();
        session.store_token(&ctx.token).unwrap();
        session.clear_token().unwrap();
        assert_eq!(session.load_token(), None);
        assert!(!session.secret().exists());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_client_uses_its_own_token_file(ctx: &mut SessionTestContext) {
        let client = OkrClient::with_base_url("http://127.0.0.1:9/api");
        assert_eq!(client.token_file(), ".okr_token");
        assert!(!client.is_authenticated());

        mock().store_token(&ctx.token).unwrap();
        assert_eq!(client.load_token(), None);

        client.store_token(&ctx.token).unwrap();
        assert_eq!(client.load_token(), Some(ctx.token.clone()));
    }
}
