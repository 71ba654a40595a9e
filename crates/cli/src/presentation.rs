// crates/cli/src/presentation.rs
use line_tally_engine::error::EngineError;
use line_tally_engine::stats::Totals;
use std::fmt::Write;
use std::path::PathBuf;

/// Render the final report.
pub fn format_report(totals: &Totals) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("Scan results:\n");
    // String への書き込みは失敗しない
    let _ = writeln!(out, "Files scanned: {}", totals.files);
    let _ = writeln!(out, "Code lines: {}", totals.code);
    let _ = writeln!(out, "Blank lines: {}", totals.blank);
    let _ = writeln!(out, "Comment lines: {}", totals.comment);
    out
}

pub fn print_report(totals: &Totals) {
    print!("{}", format_report(totals));
}

pub fn print_errors(errors: &[(PathBuf, EngineError)]) {
    for (_, err) in errors {
        eprintln!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_all_four_totals() {
        let totals = Totals {
            files: 3,
            code: 42,
            blank: 7,
            comment: 5,
        };
        assert_eq!(
            format_report(&totals),
            "\nScan results:\nFiles scanned: 3\nCode lines: 42\nBlank lines: 7\nComment lines: 5\n"
        );
    }
}
