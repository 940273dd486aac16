//! Integration tests for the GPS conversion pipeline
//!
//! Covers:
//! - Unaveraged output and column layout
//! - Comment passthrough and malformed lines
//! - Satellite filtering ahead of the averager
//! - Window flushing, member counts and end-of-input flush
//! - Midnight rollover date selection

use harbor_columns::{convert_gps, convert_gps_file, ConvertOptions};
use std::fs;
use tempfile::TempDir;

fn run(input: &str, window_secs: f32, min_sats: i32) -> (String, harbor_columns::ConversionStats) {
    let options = ConvertOptions {
        window_secs,
        min_sats: Some(min_sats),
    };
    let mut out = Vec::new();
    let stats = convert_gps(input.as_bytes(), &mut out, &options).expect("conversion failed");
    (String::from_utf8(out).expect("output is UTF-8"), stats)
}

fn member_count(line: &str) -> usize {
    line.split_whitespace()
        .last()
        .and_then(|c| c.parse().ok())
        .expect("averaged line ends with a member count")
}

#[test]
fn test_single_record_without_averaging() {
    let (out, stats) = run("1.0,01/02/24,00:00:01,10.0000000,20.0000000,5.0,08\n", 0.0, 0);
    assert_eq!(
        out,
        "   1.0  1  2 2024  0  0  1  10.0000000   20.0000000      5.0  8\n"
    );
    assert_eq!(stats.records, 1);
    assert_eq!(stats.raw_lines, 1);
    assert_eq!(stats.windows, 0);
}

#[test]
fn test_passthrough_lines_are_verbatim() {
    let input = "Harbor GPS log\n\
                 Time,Date,UTC,Lat,Lon,Alt,Sats\n\
                 \n\
                 1.0,01/02/24,00:00:01,10.0,20.0,5.0,8\n\
                 12,bad\n\
                 \tindented note\r\n\
                 trailing line without newline";
    let (out, stats) = run(input, 0.0, 0);
    let expected = "# Harbor GPS log\n\
                    # Time,Date,UTC,Lat,Lon,Alt,Sats\n\
                    # \n\
                    \x20  1.0  1  2 2024  0  0  1  10.0000000   20.0000000      5.0  8\n\
                    # 12,bad\n\
                    # \tindented note\r\n\
                    # trailing line without newline";
    assert_eq!(out, expected);
    assert_eq!(stats.comment_lines, 5);
    assert_eq!(stats.malformed_lines, 1);
    assert_eq!(stats.passthrough_lines(), 6);
}

#[test]
fn test_no_averaging_keeps_input_order() {
    let input: String = (0..5)
        .map(|i| format!("{i}.0,01/02/24,00:00:0{i},10.0,20.0,5.0,8\n"))
        .collect();
    for window in [0.0, -1.0] {
        let (out, stats) = run(&input, window, 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        for (i, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("{:6.1}", i as f32)));
            assert_eq!(line.split_whitespace().count(), 11);
        }
        assert_eq!(stats.raw_lines, 5);
    }
}

#[test]
fn test_low_satellite_records_become_comments() {
    let input = "0.0,14/11/14,10:00:00,45.0,-122.0,100.0,6\n\
                 1.0,14/11/14,10:00:01,99.0,-99.0,999.0,2\n\
                 2.0,14/11/14,10:00:02,45.0,-122.0,104.0,6\n";
    let (out, stats) = run(input, 10.0, 4);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "# 1.0,14/11/14,10:00:01,99.0,-99.0,999.0,2");
    assert_eq!(
        lines[1],
        "   1.0 14 11 2014 10  0  1  45.0000000 -122.0000000    102.0  6   2"
    );
    assert_eq!(stats.filtered_records, 1);
    assert_eq!(stats.averaged_records, 2);
}

#[test]
fn test_single_window_average() {
    let input = "0.0,14/11/14,10:00:00,45.0000000,-122.0000000,100.0,6\n\
                 1.0,14/11/14,10:00:01,45.0000000,-122.0000000,102.0,7\n\
                 2.0,14/11/14,10:00:02,45.0000000,-122.0000000,104.0,8\n";
    let (out, stats) = run(input, 5.0, 0);
    assert_eq!(
        out,
        "   1.0 14 11 2014 10  0  1  45.0000000 -122.0000000    102.0  7   3\n"
    );
    assert_eq!(stats.windows, 1);
}

#[test]
fn test_single_member_window_uses_averaged_layout() {
    let (out, _) = run("1.0,01/02/24,00:00:01,10.0,20.0,5.0,8\n", 5.0, 0);
    assert_eq!(
        out,
        "   1.0  1  2 2024  0  0  1  10.0000000   20.0000000      5.0  8   1\n"
    );
}

#[test]
fn test_windows_flush_on_boundary_and_at_end() {
    // Window length 2: {0,1,2} {2.5,4.1} {7}
    let input = "0.0,14/11/14,10:00:00,1.0,1.0,1.0,5\n\
                 1.0,14/11/14,10:00:01,1.0,1.0,1.0,5\n\
                 2.0,14/11/14,10:00:02,1.0,1.0,1.0,5\n\
                 # mid-file note\n\
                 2.5,14/11/14,10:00:02,1.0,1.0,1.0,5\n\
                 4.1,14/11/14,10:00:04,1.0,1.0,1.0,5\n\
                 7.0,14/11/14,10:00:07,1.0,1.0,1.0,5\n\
                 END\n";
    let (out, stats) = run(input, 2.0, 0);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "# # mid-file note");
    assert_eq!(member_count(lines[1]), 3);
    assert!(lines[1].starts_with("   1.0 "));
    assert_eq!(member_count(lines[2]), 2);
    assert!(lines[2].starts_with("   3.3 "));
    // The trailing comment is written before the final flush
    assert_eq!(lines[3], "# END");
    assert_eq!(member_count(lines[4]), 1);
    assert!(lines[4].starts_with("   7.0 "));
    assert_eq!(stats.windows, 3);
}

#[test]
fn test_member_counts_sum_to_records() {
    let input: String = (0..50)
        .map(|i| {
            let t = i as f32 * 0.9;
            format!("{t:.1},14/11/14,10:{:02}:{:02},45.0,-122.0,10.0,{}\n", i / 60, i % 60, 3 + i % 4)
        })
        .collect();
    let (out, stats) = run(&input, 4.0, 4);
    let total: usize = out
        .lines()
        .filter(|l| !l.starts_with('#'))
        .map(member_count)
        .sum();
    assert_eq!(total as u64, stats.records);
    assert_eq!(stats.records + stats.filtered_records, 50);
    assert_eq!(stats.averaged_records, stats.records);
}

#[test]
fn test_rollover_mean_just_before_midnight() {
    // Mean of 86398, 86399, 86401 is 86399 after integer division
    let input = "10.0,14/11/14,23:59:58,45.0,-122.0,10.0,5\n\
                 11.0,14/11/14,23:59:59,45.0,-122.0,10.0,5\n\
                 13.0,15/11/14,00:00:01,45.0,-122.0,10.0,5\n";
    let (out, _) = run(input, 10.0, 0);
    assert_eq!(
        out,
        "  11.3 14 11 2014 23 59 59  45.0000000 -122.0000000     10.0  5   3\n"
    );
}

#[test]
fn test_rollover_past_midnight_reports_latest_date() {
    let input = "100.0,14/11/14,23:59:59,45.0,-122.0,10.0,5\n\
                 102.0,15/11/14,00:00:01,45.0,-122.0,10.0,5\n\
                 104.0,15/11/14,00:00:03,45.0,-122.0,10.0,5\n\
                 200.0,16/11/14,00:01:40,45.0,-122.0,10.0,5\n";
    let (out, _) = run(input, 10.0, 0);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            " 102.0 16 11 2014  0  0  1  45.0000000 -122.0000000     10.0  5   3",
            " 200.0 16 11 2014  0  1 40  45.0000000 -122.0000000     10.0  5   1",
        ]
    );
}

#[test]
fn test_all_records_after_midnight_roll_over() {
    let input = "50.0,14/11/14,23:59:59,45.0,-122.0,10.0,5\n\
                 51.0,15/11/14,00:00:01,45.0,-122.0,10.0,5\n\
                 52.0,15/11/14,00:00:03,45.0,-122.0,10.0,5\n\
                 53.0,15/11/14,00:00:05,45.0,-122.0,10.0,5\n";
    let (out, stats) = run(input, 10.0, 0);
    assert_eq!(
        out,
        "  51.5 15 11 2014  0  0  2  45.0000000 -122.0000000     10.0  5   4\n"
    );
    assert_eq!(stats.windows, 1);
}

#[test]
fn test_rollover_at_end_of_input_uses_last_record_date() {
    let input = "100.0,14/11/14,23:59:59,45.0,-122.0,10.0,5\n\
                 102.0,15/11/14,00:00:01,45.0,-122.0,10.0,5\n\
                 104.0,15/11/14,00:00:03,45.0,-122.0,10.0,5\n";
    let (out, _) = run(input, 10.0, 0);
    assert_eq!(
        out,
        " 102.0 15 11 2014  0  0  1  45.0000000 -122.0000000     10.0  5   3\n"
    );
}

#[test]
fn test_empty_input_produces_nothing() {
    let (out, stats) = run("", 10.0, 0);
    assert!(out.is_empty());
    assert_eq!(stats, harbor_columns::ConversionStats::default());
}

#[test]
fn test_convert_gps_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gps.csv");
    fs::write(&path, "Header\n1.0,01/02/24,00:00:01,10.0,20.0,5.0,8\n").unwrap();

    let mut out = Vec::new();
    let stats = convert_gps_file(&path, &mut out, &ConvertOptions::default()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("# Header\n"));
    assert_eq!(stats.lines_read, 2);
}

#[test]
fn test_convert_gps_file_missing_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut out = Vec::new();
    let result = convert_gps_file(
        &temp_dir.path().join("missing.csv"),
        &mut out,
        &ConvertOptions::default(),
    );
    assert!(matches!(result, Err(harbor_columns::ConvertError::Io(_))));
    assert!(out.is_empty());
}
