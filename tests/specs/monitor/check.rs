//! `slotwatch check` specs

use crate::prelude::*;

#[test]
fn check_summarizes_continuous_config() {
    let temp = Project::empty();
    temp.config("https://minha.anem.dz/pre_rendez_vous", "");

    temp.slotwatch()
        .args(&["check"])
        .passes()
        .stdout_has("Configuration OK")
        .stdout_has("https://minha.anem.dz/pre_rendez_vous")
        .stdout_has("continuous (every 60s)")
        .stdout_has("Allow:    (any)")
        .stdout_has("results.txt");
}

#[test]
fn env_times_switch_to_scheduled() {
    let temp = Project::empty();
    temp.config("https://example.org/rdv", "");

    temp.slotwatch()
        .args(&["check"])
        .env("SLOTWATCH_TIMES", "08:00,12:30")
        .passes()
        .stdout_has("scheduled at 08:00, 12:30 (grace 0 min)");
}

#[test]
fn check_json_is_machine_readable() {
    let temp = Project::empty();
    temp.config(
        "https://example.org/rdv",
        "[filter]\nallow = [\"rendez\", \"حجز\"]\nexclude = [\"fermé\"]",
    );

    let run = temp.slotwatch().args(&["check", "--format", "json"]).passes();
    let json: serde_json::Value = serde_json::from_str(run.stdout()).unwrap();

    assert_eq!(json["mode"], "continuous");
    assert_eq!(json["interval_seconds"], 60);
    assert_eq!(json["allow"], serde_json::json!(["rendez", "حجز"]));
    assert_eq!(json["exclude"], serde_json::json!(["fermé"]));
    assert_eq!(json["desktop_notifications"], false);
}

#[test]
fn explicit_config_path_is_used() {
    let temp = Project::empty();
    temp.file(
        "conf/watch.toml",
        "target_url = \"https://example.org/elsewhere\"\n",
    );

    cli()
        .args(&[
            "check",
            "--config",
            temp.join("conf/watch.toml").to_str().unwrap(),
        ])
        .passes()
        .stdout_has("https://example.org/elsewhere");
}
