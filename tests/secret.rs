#[cfg(test)]
mod tests {
    use okr::libs::data_storage::DataStorage;
    use okr::libs::secret::Secret;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct SecretTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
        secret_file_name: String,
        token: String,
    }

    impl TestContext for SecretTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            SecretTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
                secret_file_name: ".test_secret".to_string(),
                token: "eyJhbGciOiJIUzI1NiJ9.payload.signature".to_string(),
            }
        }
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_write_and_read(ctx: &mut SecretTestContext) {
        let secret = Secret::new(&ctx.secret_file_name);
        assert!(!secret.exists());

        secret.write(&ctx.token).unwrap();
        assert!(secret.exists());
        assert_eq!(secret.read().unwrap(), ctx.token);
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_value_is_not_stored_in_plain_text(ctx: &mut SecretTestContext) {
        Secret::new(&ctx.secret_file_name).write(&ctx.token).unwrap();

        let path = DataStorage::new().get_path(&ctx.secret_file_name).unwrap();
        let stored = fs::read_to_string(path).unwrap();
        assert!(!stored.contains(&ctx.token));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_overwrite_replaces_value(ctx: &mut SecretTestContext) {
        let secret = Secret::new(&ctx.secret_file_name);
        secret.write("first").unwrap();
        secret.write("second").unwrap();
        assert_eq!(secret.read().unwrap(), "second");
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_read_missing_secret_fails(ctx: &mut SecretTestContext) {
        assert!(Secret::new(&ctx.secret_file_name).read().is_err());
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_read_corrupted_secret_fails(ctx: &mut SecretTestContext) {
        let path = DataStorage::new().get_path(&ctx.secret_file_name).unwrap();
        fs::write(path, "not base64 at all!").unwrap();
        assert!(Secret::new(&ctx.secret_file_name).read().is_err());
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_delete(ctx: &mut SecretTestContext) {
        let secret = Secret::new(&ctx.secret_file_name);
        secret.write(&ctx.token).unwrap();
        secret.delete().unwrap();
        assert!(!secret.exists());
        secret.delete().unwrap();
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_secrets_are_independent(ctx: &mut SecretTestContext) {
        let first = Secret::new(&ctx.secret_file_name);
        let second = Secret::new(".other_secret");
        first.write("one").unwrap();
        second.write("two").unwrap();

        assert_eq!(first.read().unwrap(), "one");
        assert_eq!(second.read().unwrap(), "two");
    }
}
