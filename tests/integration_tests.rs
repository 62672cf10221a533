//! End-to-end CLI tests: argument handling, exit codes, and rendered output.

use assert_cmd::Command;
use predicates::prelude::*;

fn minical() -> Command {
    Command::cargo_bin("minical").unwrap()
}

mod default_invocation {
    use super::*;

    #[test]
    fn no_arguments_prints_a_calendar() {
        minical()
            .assert()
            .success()
            .stdout(predicate::str::contains("Su Mo Tu We Th Fr Sa"));
    }

    #[test]
    fn no_arguments_uses_current_month() {
        let expected = "     April 2025
Su Mo Tu We Th Fr Sa
       1  2  3  4  5
 6  7  8  9 10 11 12
13 14 15 16 17 18 19
20 21 22 23 24 25 26
27 28 29 30
";
        minical()
            .env("MINICAL_TEST_TIME", "2025-04-15")
            .assert()
            .success()
            .stdout(expected);
    }

    #[test]
    fn output_is_newline_terminated() {
        minical()
            .assert()
            .success()
            .stdout(predicate::str::ends_with("\n"));
    }
}

mod month_flag {
    use super::*;

    #[test]
    fn selects_month_in_current_year() {
        let expected = "   February 2026
Su Mo Tu We Th Fr Sa
 1  2  3  4  5  6  7
 8  9 10 11 12 13 14
15 16 17 18 19 20 21
22 23 24 25 26 27 28
";
        minical()
            .env("MINICAL_TEST_TIME", "2026-07-01")
            .args(["-m", "2"])
            .assert()
            .success()
            .stdout(expected);
    }

    #[test]
    fn month_zero_is_rejected() {
        minical()
            .args(["-m", "0"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("bad month"))
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn month_thirteen_is_rejected() {
        minical()
            .args(["-m", "13"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("bad month"));
    }

    #[test]
    fn non_numeric_month_is_rejected() {
        minical()
            .args(["-m", "abc"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("abc: bad month"));
    }

    #[test]
    fn missing_month_value_is_a_usage_error() {
        minical().arg("-m").assert().failure().code(1);
    }
}

mod usage_errors {
    use super::*;

    #[test]
    fn stray_positional_argument() {
        minical()
            .arg("2026")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn two_positional_arguments() {
        minical().args(["2", "2026"]).assert().failure().code(1);
    }

    #[test]
    fn unknown_flag() {
        minical().arg("-x").assert().failure().code(1);
    }

    #[test]
    fn help_and_version_still_succeed() {
        minical()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("current month"));
        minical().arg("--version").assert().success();
    }
}
