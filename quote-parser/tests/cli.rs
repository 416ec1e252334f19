use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const XXX_FILE: &str = "From: XXX At: 12/10/21 09:15:02 EST-5:00
Subject: HY37 5y SWAPTION UPDATE - Ref 108 (320.43)
Expiry 15Dec21 (107.78 323.85)
Stk   Sprd  |     Pay      Delta       Rec      Vol   Vol Chg  Vol Bpd  Tail  |
110.5 266.8 | 2.650/2.800  -99.9      --/--     30.2    1.6      6.2    99.9  |
";

const YYY_FILE: &str = "From: YYY At: 12/10/21 09:15:02 EST-5:00
Subject: $$ CDX OPTIONS: HY37 5Y UPDATE - REF 108.125
EXPIRY: 15-DEC-2021 Fwd 107.89 / 320.8 Dv01 4.67
K [~Sprd]  |DEC21>PAY   Dlt |DEC21>RCV   Dlt |MidVol [SprdVol] Chg    b/e
109.5 [287] |155.5 170.5 95% |  0.0 9.6    5% |  4.5% [ 32%]    -1.3%  6.05
";

const BROKEN_FILE: &str = "From: YYY At: 12/10/21 09:15:02 EST-5:00
K [~Sprd]  |DEC21>PAY   Dlt |DEC21>RCV   Dlt |MidVol [SprdVol] Chg    b/e
109.5 [287] |155.5 170.5
";

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn cmd(dir: &Path) -> Command {
    let mut c = Command::new(assert_cmd::cargo_bin!("quote-parser"));
    c.arg("--dir").arg(dir).arg("--output").arg(dir.join("out.csv"));
    c
}

#[test]
fn parses_all_matching_files_and_writes_table() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "hycdx_option_quotes_1.txt", XXX_FILE);
    write(dir.path(), "hycdx_option_quotes_2.txt", YYY_FILE);
    write(dir.path(), "unrelated.txt", XXX_FILE);

    cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total records added : 4"));

    let out = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Date,Time,Firm,Expiration,Option Type,"));

    let xxx_put: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(&xxx_put[..5], &["10-Dec-21", "09:15:02", "XXX", "15-Dec-21", "P"]);
    assert_eq!(xxx_put[7].parse::<f64>().unwrap(), 2.65);

    let yyy_put: Vec<&str> = lines[3].split(',').collect();
    assert_eq!(yyy_put[2], "YYY");
    assert_eq!(yyy_put[7].parse::<f64>().unwrap(), 1.555);
    assert_eq!(yyy_put[13].parse::<f64>().unwrap(), 108.125);
}

#[test]
fn raw_mode_keeps_text() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "hycdx_option_quotes_2.txt", YYY_FILE);

    cmd(dir.path()).arg("--raw").assert().success();

    let out = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert!(out.contains(",P,109.5,287,155.5,170.5,95,32,6.05,,108.125"));
}

#[test]
fn broken_file_is_reported_but_batch_continues() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "hycdx_option_quotes_1.txt", BROKEN_FILE);
    write(dir.path(), "hycdx_option_quotes_2.txt", YYY_FILE);

    cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total records added : 2"))
        .stderr(predicate::str::contains("hycdx_option_quotes_1.txt"));
}

#[test]
fn strict_mode_fails_on_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "hycdx_option_quotes_1.txt", BROKEN_FILE);
    write(dir.path(), "hycdx_option_quotes_2.txt", YYY_FILE);

    cmd(dir.path()).arg("--strict").assert().failure();
}

#[test]
fn unknown_sender_produces_no_records() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "hycdx_option_quotes_1.txt",
        &XXX_FILE.replace("From: XXX", "From: ABC"),
    );

    cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total records added : 0"));

    let out = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn invalid_divisor_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    cmd(dir.path())
        .arg("--price-divisor")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--price-divisor"));
}
