//! Small shared helpers: date windows, display-width truncation, and
//! opening links in the system browser.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Build the default query date window ending today.
///
/// Inputs:
/// - `days_back`: Window length in days; negative values read as zero
///
/// Output:
/// - `(start, end)` as YYYY-MM-DD strings in local time, start inclusive.
#[must_use]
pub fn last_days_range(days_back: i64) -> (String, String) {
    let end = chrono::Local::now().date_naive();
    let start = end - chrono::Duration::days(days_back.max(0));
    (
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    )
}

/// What: Truncate text to a display width, ending with an ellipsis.
///
/// Inputs:
/// - `text`: Source string; may contain wide characters
/// - `max_width`: Available cell count
///
/// Output:
/// - The text unchanged when it fits, otherwise a prefix plus `…` that
///   occupies at most `max_width` cells. Uses Unicode display width, not
///   byte length, so CJK titles truncate cleanly.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Open a URL in the user's browser without blocking the UI.
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - No return value; spawns a background process to open the URL.
///
/// Details:
/// - Uses `xdg-open` (Linux) with a fallback to `open` (macOS).
/// - Spawns the command in a background thread and ignores errors.
/// - During tests, this is a no-op to avoid opening real browser windows.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    // Skip actual spawning during tests
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            let _ = std::process::Command::new("xdg-open")
                .arg(&url)
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
                .or_else(|_| {
                    std::process::Command::new("open")
                        .arg(&url)
                        .stdin(std::process::Stdio::null())
                        .stdout(std::process::Stdio::null())
                        .stderr(std::process::Stdio::null())
                        .spawn()
                });
        });
    }
}
