use predicates::str::contains;

mod common;
use common::{Route, StubServer, pc, seed_punch_in, setup_test_store};

use punchclock::store::{StateStore, keys, sqlite::SqliteStore};

#[test]
fn test_login_persists_session_and_shows_name() {
    let db = setup_test_store("login_ok");
    let server = StubServer::start(vec![Route::new(
        "POST",
        "/login",
        200,
        r#"{"token":"T1","user":{"name":"A"}}"#,
    )]);

    pc().args([
        "--db",
        &db,
        "--server",
        &server.base_url,
        "login",
        "--email",
        "a@b.com",
        "--password",
        "x",
    ])
    .assert()
    .success()
    .stdout(contains("Logged in as A"));

    let store = SqliteStore::new(&db).expect("open store");
    let token: Option<String> = store.get_json(keys::TOKEN).expect("read token");
    assert_eq!(token.as_deref(), Some("T1"));
}

#[test]
fn test_login_token_nested_under_data() {
    let db = setup_test_store("login_nested");
    let server = StubServer::start(vec![Route::new(
        "POST",
        "/login",
        200,
        r#"{"data":{"token":"T9"}}"#,
    )]);

    pc().args([
        "--db",
        &db,
        "--server",
        &server.base_url,
        "login",
        "--email",
        "a@b.com",
        "--password",
        "x",
    ])
    .assert()
    .success();

    let store = SqliteStore::new(&db).expect("open store");
    let token: Option<String> = store.get_json(keys::TOKEN).expect("read token");
    assert_eq!(token.as_deref(), Some("T9"));
}

#[test]
fn test_login_empty_credentials_rejected_without_network() {
    let db = setup_test_store("login_empty");
    let server = StubServer::start(vec![Route::new("POST", "/login", 200, r#"{"token":"T"}"#)]);

    pc().args([
        "--db",
        &db,
        "--server",
        &server.base_url,
        "login",
        "--email",
        "",
        "--password",
        "",
    ])
    .assert()
    .failure()
    .stderr(contains("Email and password are required"));

    assert_eq!(server.hit_count("/login"), 0);
}

#[test]
fn test_login_bad_credentials_reports_server_message() {
    let db = setup_test_store("login_bad");
    let server = StubServer::start(vec![Route::new(
        "POST",
        "/login",
        401,
        r#"{"message":"Invalid credentials"}"#,
    )]);

    pc().args([
        "--db",
        &db,
        "--server",
        &server.base_url,
        "login",
        "--email",
        "a@b.com",
        "--password",
        "wrong",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid credentials"));

    let store = SqliteStore::new(&db).expect("open store");
    let token: Option<String> = store.get_json(keys::TOKEN).expect("read token");
    assert!(token.is_none());
}

#[test]
fn test_remember_me_saves_credentials_and_prefills_next_login() {
    let db = setup_test_store("login_remember");
    let server = StubServer::start(vec![Route::new(
        "POST",
        "/login",
        200,
        r#"{"token":"T1","user":{"name":"A"}}"#,
    )]);

    pc().args([
        "--db",
        &db,
        "--server",
        &server.base_url,
        "login",
        "--email",
        "a@b.com",
        "--password",
        "x",
        "--remember",
    ])
    .assert()
    .success();

    let store = SqliteStore::new(&db).expect("open store");
    let creds: Option<punchclock::models::SavedCreds> =
        store.get_json(keys::SAVED_CREDS).expect("read creds");
    let creds = creds.expect("credentials remembered");
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "x");

    // Second login with no flags falls back to the remembered credentials
    pc().args(["--db", &db, "--server", &server.base_url, "login"])
        .assert()
        .success()
        .stdout(contains("a@b.com"));
}

#[test]
fn test_login_with_email_flag_only_keeps_given_email() {
    let db = setup_test_store("login_partial");
    let server = StubServer::start(vec![Route::new(
        "POST",
        "/login",
        200,
        r#"{"token":"T1","user":{"name":"A"}}"#,
    )]);

    pc().args([
        "--db",
        &db,
        "--server",
        &server.base_url,
        "login",
        "--email",
        "a@b.com",
        "--password",
        "secret",
        "--remember",
    ])
    .assert()
    .success();

    // Only the password falls back to the remembered credentials; the
    // email given on the command line is the one sent to the server.
    pc().args([
        "--db",
        &db,
        "--server",
        &server.base_url,
        "login",
        "--email",
        "other@b.com",
    ])
    .assert()
    .success();

    let login_hits: Vec<String> = server
        .hits()
        .into_iter()
        .filter(|h| h.contains("/login"))
        .collect();
    assert_eq!(login_hits.len(), 2);
    assert!(login_hits[1].contains("other%40b.com"));
    assert!(login_hits[1].contains("secret"));
    assert!(!login_hits[1].contains("a%40b.com"));
}

#[test]
fn test_session_expiry_preserves_punch_state_across_relogin() {
    let db = setup_test_store("login_expiry");
    let punch_ts = chrono::Local::now().timestamp() - 600;

    // Phase 1: a sync against an expired token
    {
        let server = StubServer::start(vec![
            Route::new("GET", "/me", 401, r#"{"message":"expired"}"#),
            Route::new("GET", "/user/status", 401, r#"{"message":"expired"}"#),
            Route::new("GET", "/punch/history", 401, r#"{"message":"expired"}"#),
        ]);

        common::seed_token(&db, "STALE");
        seed_punch_in(&db, punch_ts);

        pc().args(["--db", &db, "--server", &server.base_url, "status"])
            .assert()
            .failure()
            .stderr(contains("Session expired"));
    }

    // 401 cleared the session but not the punch state
    {
        let store = SqliteStore::new(&db).expect("open store");
        let token: Option<String> = store.get_json(keys::TOKEN).expect("read token");
        assert!(token.is_none());
        let punch: Option<i64> = store.get_json(keys::PUNCH_IN_TIME).expect("read punch");
        assert_eq!(punch, Some(punch_ts));
    }

    // Phase 2: re-login; the punch session is still there
    let server = StubServer::start(vec![Route::new(
        "POST",
        "/login",
        200,
        r#"{"token":"T2","user":{"name":"A"}}"#,
    )]);

    pc().args([
        "--db",
        &db,
        "--server",
        &server.base_url,
        "login",
        "--email",
        "a@b.com",
        "--password",
        "x",
    ])
    .assert()
    .success()
    .stdout(contains("Punched in since"));

    let store = SqliteStore::new(&db).expect("open store");
    let punch: Option<i64> = store.get_json(keys::PUNCH_IN_TIME).expect("read punch");
    assert_eq!(punch, Some(punch_ts));
}

#[test]
fn test_manual_logout_clears_punch_state_but_keeps_saved_creds() {
    let db = setup_test_store("logout_manual");
    let server = StubServer::start(vec![
        Route::new("POST", "/login", 200, r#"{"token":"T1","user":{"name":"A"}}"#),
        Route::new("POST", "/logout", 200, r#"{}"#),
    ]);

    pc().args([
        "--db",
        &db,
        "--server",
        &server.base_url,
        "login",
        "--email",
        "a@b.com",
        "--password",
        "x",
        "--remember",
    ])
    .assert()
    .success();

    seed_punch_in(&db, chrono::Local::now().timestamp());

    pc().args(["--db", &db, "--server", &server.base_url, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out"));

    let store = SqliteStore::new(&db).expect("open store");
    let token: Option<String> = store.get_json(keys::TOKEN).expect("read token");
    assert!(token.is_none());
    let punch: Option<i64> = store.get_json(keys::PUNCH_IN_TIME).expect("read punch");
    assert!(punch.is_none());
    let creds: Option<punchclock::models::SavedCreds> =
        store.get_json(keys::SAVED_CREDS).expect("read creds");
    assert!(creds.is_some());
}
