use quote_core::dates::canonical;
use quote_core::{FileStatus, OptionSide, QuoteParser, QuoteRecord, RescalePolicy, normalize};

fn parse(lines: &[&str]) -> (Vec<QuoteRecord>, FileStatus) {
    let parser = QuoteParser::new().unwrap();
    let file = parser.parse_lines(lines).unwrap();
    (file.records, file.status)
}

fn assert_shared_facts(records: &[QuoteRecord], sender: &str) {
    for r in records {
        assert_eq!(r.sender, sender);
        assert_eq!(canonical(r.date), "10-Dec-21");
        assert_eq!(r.time, "09:15:02");
    }
    let first = &records[0];
    assert!(
        records
            .iter()
            .all(|r| r.expiration == first.expiration && r.ref_px == first.ref_px)
    );
}

#[test]
fn xxx_three_line_file() {
    let (recs, status) = parse(&[
        "From: XXX At: 12/10/21 09:15:02 EST-5:00",
        "Stk   Sprd  |     Pay      Delta       Rec      Vol   Vol Chg  Vol Bpd  Tail  |",
        "110.5 266.8 | 2.650/2.800  -99.9      --/--     30.2    1.6      6.2    99.9  |",
    ]);

    assert_eq!(status, FileStatus::Completed);
    assert_eq!(recs.len(), 2);
    assert_shared_facts(&recs, "XXX");
    assert_eq!(recs[0].side, OptionSide::Put);
    assert_eq!(recs[0].bid_price.as_deref(), Some("2.650"));
    assert_eq!(recs[0].delta.as_deref(), Some("99.9"));
    assert_eq!(recs[1].side, OptionSide::Call);
    assert_eq!(recs[1].bid_price, None);
}

#[test]
fn yyy_three_line_file() {
    let (recs, status) = parse(&[
        "From: YYY At: 12/10/21 09:15:02 EST-5:00",
        "K [~Sprd]  |DEC21>PAY   Dlt |DEC21>RCV   Dlt |MidVol [SprdVol] Chg    b/e",
        "109.5 [287] |155.5 170.5 95% |  0.0 9.6    5% |  4.5% [ 32%]    -1.3%  6.05",
    ]);

    assert_eq!(status, FileStatus::Completed);
    assert_eq!(recs.len(), 2);
    assert_shared_facts(&recs, "YYY");
    assert_eq!(recs[0].ask_price.as_deref(), Some("170.5"));
    assert_eq!(recs[1].ask_price.as_deref(), Some("9.6"));
}

#[test]
fn zzz_three_line_file() {
    let (recs, status) = parse(&[
        "From: ZZZ At: 12/10/21 09:15:02 EST-5:00",
        "   K    |     Puts    Del |    Calls    Del |   Vol    Chg |  Prc Vol",
        "    108 |   52 /  70   55 |   40 /  58  -45 |  41.7   +1.5 |    6.1 ",
    ]);

    assert_eq!(status, FileStatus::Completed);
    assert_eq!(recs.len(), 2);
    assert_shared_facts(&recs, "ZZZ");
    assert_eq!(recs[0].iv_px.as_deref(), Some("6.1"));
    assert_eq!(recs[1].delta.as_deref(), Some("-45"));
}

#[test]
fn www_three_line_file_with_missing_call() {
    let (recs, status) = parse(&[
        "From: WWW At: 12/10/21 09:15:02 EST-5:00",
        "  K  |    Rec    Delta Vol  Chg B/E|   K  |     Pay     Delta Vol  Chg  B/E",
        "   -  |                               |  109 | 114.1/130.1  86%   37 -0.1  6.8",
    ]);

    assert_eq!(status, FileStatus::Completed);
    assert_eq!(recs.len(), 2);
    assert_shared_facts(&recs, "WWW");
    assert!(!recs[0].is_empty_leg());
    assert_eq!(recs[1].side, OptionSide::Call);
    assert!(recs[1].is_empty_leg());
}

#[test]
fn full_message_with_noise_lines() {
    let (recs, status) = parse(&[
        "*** forwarded ***",
        "From: WWW At: 12/10/21 09:15:02 EST-5:00",
        "Subject: CDX Options: CDX.HY S37/36 5Y Dec-Jun [ref 108.1] - Update",
        "",
        "CDX Options: HY (S37V1) 15-Dec-21 ** Fwd @107.881, Delta @108.1",
        "  K  |    Rec    Delta Vol  Chg B/E|   K  |     Pay     Delta Vol  Chg  B/E",
        " 111 |  0.0/10.0   0%   32  0.4 5.3|  109 | 114.1/130.1  86%   37 -0.1  6.8",
        " 112 |  0.0/5.0    0%   33  0.4 5.5|  108 |  98.0/112.0  80%   36 -0.1  6.6",
        "  K  |    Rec    Delta Vol  Chg B/E|   K  |     Pay     Delta Vol  Chg  B/E",
        "Levels are indicative.",
    ]);

    assert_eq!(status, FileStatus::Completed);
    assert_eq!(recs.len(), 4);
    assert_shared_facts(&recs, "WWW");
    assert!(recs.iter().all(|r| r.ref_px.as_deref() == Some("108.1")));
    assert!(
        recs.iter()
            .all(|r| r.expiration.map(canonical).as_deref() == Some("15-Dec-21"))
    );
    assert_eq!(recs[2].strike_px.as_deref(), Some("108"));
    assert_eq!(recs[3].strike_px.as_deref(), Some("112"));
}

#[test]
fn unknown_sender_yields_nothing() {
    let (recs, status) = parse(&[
        "From: ABC At: 12/10/21 09:15:02 EST-5:00",
        "Stk   Sprd  |     Pay      Delta       Rec      Vol   Vol Chg  Vol Bpd  Tail  |",
        "110.5 266.8 | 2.650/2.800  -99.9      --/--     30.2    1.6      6.2    99.9  |",
    ]);

    assert!(recs.is_empty());
    assert!(matches!(status, FileStatus::Abandoned { ref sender, .. } if sender == "ABC"));
}

#[test]
fn normalization_over_mixed_senders() {
    let parser = QuoteParser::new().unwrap();
    let mut all = Vec::new();
    for lines in [
        vec![
            "From: XXX At: 12/10/21 09:15:02 EST-5:00",
            "Stk   Sprd  |     Pay      Delta       Rec      Vol   Vol Chg  Vol Bpd  Tail  |",
            "110.5 266.8 | 2.650/2.800  -99.9      --/--     30.2    1.6      6.2    99.9  |",
        ],
        vec![
            "From: YYY At: 12/10/21 09:15:02 EST-5:00",
            "K [~Sprd]  |DEC21>PAY   Dlt |DEC21>RCV   Dlt |MidVol [SprdVol] Chg    b/e",
            "109.5 [287] |155.5 170.5 95% |  0.0 9.6    5% |  4.5% [ 32%]    -1.3%  6.05",
        ],
    ] {
        all.extend(parser.parse_lines(lines).unwrap().records);
    }

    let rows = normalize(&all, &RescalePolicy::default());
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].bid_price, Some(2.65));
    assert_eq!(rows[1].bid_price, None);
    assert_eq!(rows[2].bid_price, Some(1.555));
    let call_ask = rows[3].ask_price.unwrap();
    assert!((call_ask - 0.096).abs() < 1e-12);
}
