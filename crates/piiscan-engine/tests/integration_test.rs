use piiscan_config::InputConfig;
use piiscan_engine::{EngineError, Scanner};

fn run(input: &str) -> (String, piiscan_engine::ScanSummary) {
    let mut output = Vec::new();
    let summary = Scanner::default()
        .scan(input.as_bytes(), &mut output)
        .unwrap();
    (String::from_utf8(output).unwrap(), summary)
}

fn report_rows(report: &str) -> Vec<csv::StringRecord> {
    csv::Reader::from_reader(report.as_bytes())
        .records()
        .map(|r| r.unwrap())
        .collect()
}

const SAMPLE: &str = r#"record_id,Data_json
1,"{""phone"": ""9876543210"", ""order_value"": 1200}"
2,"{""name"": ""Jane Doe"", ""email"": ""jane@x.com""}"
3,"{""name"": ""Jane Doe""}"
4,"{""aadhar"": ""1234 5678 9012""}"
5,"{broken json"
"#;

#[test]
fn test_scan_report() {
    let (report, summary) = run(SAMPLE);

    assert!(report.starts_with("record_id,redacted_data_json,is_pii\n"));
    assert_eq!(summary.records, 5);
    assert_eq!(summary.pii_records, 3);
    assert_eq!(summary.invalid_records, 1);

    let rows = report_rows(&report);
    let ids: Vec<_> = rows.iter().map(|r| &r[0]).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

    assert_eq!(&rows[0][1], r#"{"phone":"98XXXXXX10","order_value":1200}"#);
    assert_eq!(&rows[0][2], "True");

    assert_eq!(&rows[1][1], r#"{"name":"JXXX DXXX","email":"jaXXX@x.com"}"#);
    assert_eq!(&rows[1][2], "True");

    assert_eq!(&rows[2][1], r#"{"name":"Jane Doe"}"#);
    assert_eq!(&rows[2][2], "False");

    assert_eq!(&rows[3][1], r#"{"aadhar":"1234 XXXX XXXX"}"#);

    assert_eq!(&rows[4][1], "{}");
    assert_eq!(&rows[4][2], "False");
}

#[test]
fn test_lowercase_data_column() {
    let input = "record_id,data_json\n9,\"{\"\"passport\"\": \"\"P1234567\"\"}\"\n";
    let (report, _) = run(input);

    let rows = report_rows(&report);
    assert_eq!(&rows[0][1], r#"{"passport":"PXXXXXXX"}"#);
}

#[test]
fn test_empty_data_cell_falls_back_to_next_column() {
    let input = "record_id,Data_json,data_json\n\
                 1,,\"{\"\"phone\"\": \"\"9876543210\"\"}\"\n\
                 2,\"{\"\"name\"\": \"\"Jane Doe\"\"}\",\"{\"\"phone\"\": \"\"9876543210\"\"}\"\n";
    let (report, summary) = run(input);

    assert_eq!(summary.invalid_records, 0);
    let rows = report_rows(&report);
    assert_eq!(&rows[0][1], r#"{"phone":"98XXXXXX10"}"#);
    assert_eq!(&rows[0][2], "True");
    assert_eq!(&rows[1][1], r#"{"name":"Jane Doe"}"#);
    assert_eq!(&rows[1][2], "False");
}

#[test]
fn test_short_row_scanned_as_empty() {
    let input = "record_id,Data_json\n10\n";
    let (report, summary) = run(input);

    assert_eq!(summary.invalid_records, 1);
    let rows = report_rows(&report);
    assert_eq!(&rows[0][0], "10");
    assert_eq!(&rows[0][1], "{}");
}

#[test]
fn test_header_only_input() {
    let (report, summary) = run("record_id,Data_json\n");

    assert_eq!(summary.records, 0);
    assert_eq!(report, "record_id,redacted_data_json,is_pii\n");
}

#[test]
fn test_missing_id_column() {
    let mut output = Vec::new();
    let err = Scanner::default()
        .scan("id,Data_json\n1,{}\n".as_bytes(), &mut output)
        .unwrap_err();

    assert!(matches!(err, EngineError::MissingColumn(ref c) if c == "record_id"));
}

#[test]
fn test_custom_columns() {
    let scanner = Scanner::new(InputConfig {
        id_column: "id".to_string(),
        data_columns: vec!["payload".to_string()],
    });
    let input = "payload,id\n\"{\"\"upi_id\"\": \"\"user123@ybl\"\"}\",a-1\n";

    let mut output = Vec::new();
    scanner.scan(input.as_bytes(), &mut output).unwrap();

    let rows = report_rows(&String::from_utf8(output).unwrap());
    assert_eq!(&rows[0][0], "a-1");
    assert_eq!(&rows[0][1], r#"{"upi_id":"usXXX23@ybl"}"#);
}

#[test]
fn test_scan_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.csv");
    let output_path = dir.path().join("output.csv");
    std::fs::write(&input_path, SAMPLE).unwrap();

    let summary = Scanner::default()
        .scan_file(&input_path, &output_path)
        .unwrap();

    assert_eq!(summary.records, 5);
    let report = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(report_rows(&report).len(), 5);
}

#[test]
fn test_scan_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = Scanner::default().scan_file(
        &dir.path().join("nope.csv"),
        &dir.path().join("out.csv"),
    );

    assert!(matches!(result, Err(EngineError::Io(_))));
}
