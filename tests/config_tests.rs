use predicates::str::contains;

mod common;
use common::{pc, setup_test_store};

use std::env;
use std::path::PathBuf;

/// `init` resolves the config directory from the platform home directory,
/// so pointing HOME at a scratch dir must land the config file there.
#[test]
fn test_init_writes_config_under_home_dir() {
    let mut home: PathBuf = env::temp_dir();
    home.push("punchclock_home_init");
    std::fs::remove_dir_all(&home).ok();
    std::fs::create_dir_all(&home).expect("create scratch home");

    let db = setup_test_store("init_home");

    pc().env("HOME", &home)
        .args(["--db", &db, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let conf = home.join(".punchclock").join("punchclock.conf");
    assert!(conf.exists(), "config file not created at {conf:?}");

    let content = std::fs::read_to_string(&conf).expect("read config file");
    assert!(content.contains("server_url"));
    assert!(content.contains(&db));
}

#[test]
fn test_config_check_passes_on_initialized_file() {
    let mut home: PathBuf = env::temp_dir();
    home.push("punchclock_home_check");
    std::fs::remove_dir_all(&home).ok();
    std::fs::create_dir_all(&home).expect("create scratch home");

    let db = setup_test_store("config_check");

    pc().env("HOME", &home)
        .args(["--db", &db, "init"])
        .assert()
        .success();

    pc().env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));
}
