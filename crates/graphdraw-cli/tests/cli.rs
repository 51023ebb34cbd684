use assert_cmd::Command;
use predicates::prelude::*;

fn graphdraw() -> Command {
    let mut cmd = Command::cargo_bin("graphdraw").unwrap();
    cmd.env_remove("GRAPHDRAW_FONT")
        .env_remove("GRAPHDRAW_YEAR")
        .env_remove("GRAPHDRAW_COMMITS")
        .env_remove("GRAPHDRAW_STRICT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_lists_backdated_dates() {
    graphdraw()
        .args(["script", "--msg", "i", "--font", "3x3", "--year", "2023", "--commits", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMITS_PER_DAY=5"))
        .stdout(predicate::str::contains(
            "2023-01-08T00:00:07 2023-01-09T00:00:08 2023-01-10T00:00:09",
        ));
}

#[test]
fn preview_writes_html() {
    graphdraw()
        .args(["preview", "--msg", "hello", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<table class=\"graph\""))
        .stdout(predicate::str::contains("occupiedCell"))
        .stdout(predicate::str::contains("data-commits-per-day=\"80\""));
}

#[test]
fn year_can_come_from_environment() {
    graphdraw()
        .env("GRAPHDRAW_YEAR", "2023")
        .args(["script", "--msg", "i", "--font", "3x3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-01-08T00:00:07"));
}

#[test]
fn show_prints_weekday_rows() {
    graphdraw()
        .args(["show", "--msg", "hi", "--year", "2023", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun █·█"))
        .stdout(predicate::str::contains("Sat "));
}

#[test]
fn message_too_long_fails() {
    graphdraw()
        .args(["script", "--msg", "this message will never fit", "--year", "2023"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overflows the contribution graph"));
}

#[test]
fn strict_mode_rejects_digits() {
    graphdraw()
        .args(["script", "--msg", "abc1", "--year", "2023", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported character"));
}

#[test]
fn unknown_font_is_rejected() {
    graphdraw()
        .args(["show", "--msg", "a", "--font", "8x8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown font"));
}
