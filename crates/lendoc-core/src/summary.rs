//! Plain-text submission summary export.
//!
//! A summary is one `Field Title: value` line per field, joined with `\n`,
//! in the order the values were given. Values are written verbatim: a value
//! containing a newline breaks the one-line-per-field layout.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::info;

/// Prefix of exported summary files.
pub const SUMMARY_FILE_PREFIX: &str = "Loan_Submission";

/// Render a field key as a title, e.g. `loan_amount` -> `Loan Amount`.
///
/// A letter is upper-cased when the character before it is not a letter and
/// lower-cased otherwise; underscores then become spaces.
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_is_letter = false;

    for c in key.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(if c == '_' { ' ' } else { c });
            prev_is_letter = false;
        }
    }

    out
}

/// Build the summary document for the given `(field, value)` pairs.
pub fn build_summary<I, K, V>(values: I) -> Vec<u8>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    values
        .into_iter()
        .map(|(k, v)| format!("{}: {}", title_case(k.as_ref()), v.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
        .into_bytes()
}

/// Split a summary back into `(title, value)` pairs on the first `": "` of each line.
///
/// Lines without a separator are skipped.
pub fn parse_summary(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| line.split_once(": "))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Summary file name for a given export time: `Loan_Submission_YYYYMMDD_HHMMSS.txt`.
pub fn summary_file_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    summary_file_name_with_prefix(SUMMARY_FILE_PREFIX, timestamp)
}

/// Summary file name with a custom prefix.
pub fn summary_file_name_with_prefix<Tz: TimeZone>(prefix: &str, timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.txt", prefix, timestamp.format("%Y%m%d_%H%M%S"))
}

/// Write a summary into `dir` and return the path of the new file.
pub fn write_summary<I, K, V, Tz>(
    dir: &Path,
    prefix: &str,
    values: I,
    timestamp: &DateTime<Tz>,
) -> std::io::Result<PathBuf>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    std::fs::create_dir_all(dir)?;
    let path = dir.join(summary_file_name_with_prefix(prefix, timestamp));
    std::fs::write(&path, build_summary(values))?;

    info!("Summary written to {}", path.display());

    Ok(path)
}
