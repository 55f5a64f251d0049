#![cfg(feature = "derive")]

//! Cross-validation against an independent delimited-text parser.

use tablature::{Options, Record, load_str};

#[derive(Debug, PartialEq, Record)]
struct Row {
    first: String,
    second: String,
    third: String,
}

fn csv_rows(input: &str, has_headers: bool) -> Vec<Row> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_headers)
        .from_reader(input.as_bytes());

    reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            Row {
                first: record[0].to_owned(),
                second: record[1].to_owned(),
                third: record[2].to_owned(),
            }
        })
        .collect()
}

#[test]
fn agrees_with_the_csv_crate_on_plain_fields() {
    let input = "x\ty\tz\n1\t2\t3\nalpha\tbeta\tgamma\n";

    let decoded: Vec<Row> = load_str(input, Options::default()).unwrap();

    assert_eq!(decoded, csv_rows(input, true));
}

#[test]
fn agrees_with_the_csv_crate_on_generated_input() {
    let mut input = String::from("id\tname\tscore\n");
    for i in 0..100 {
        input.push_str(&format!("{i}\titem-{i}\t{}\n", i * 3));
    }

    let decoded: Vec<Row> = load_str(&input, Options::default()).unwrap();

    assert_eq!(decoded.len(), 100);
    assert_eq!(decoded, csv_rows(&input, true));
}

#[test]
fn agrees_with_the_csv_crate_without_headers() {
    let input = "1\t2\t3\n4\t5\t6\n";

    let decoded: Vec<Row> = load_str(
        input,
        Options {
            header: false,
            ..Options::default()
        },
    )
    .unwrap();

    assert_eq!(decoded, csv_rows(input, false));
}
