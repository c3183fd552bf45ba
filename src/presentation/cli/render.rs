//! Plain text rendering of screen states.

use std::io::{self, Write};

use crate::domain::entities::{SavedPassword, SessionIdentity};

const MASK: &str = "********";
const LOGIN_HINT: &str = "Log in first: passforge login --username <name>";

/// Writes `text` as one line.
pub fn line(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")
}

/// Tells a guest how to log in.
pub fn login_hint(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{LOGIN_HINT}")
}

/// Describes who the stored token belongs to.
pub fn identity(out: &mut impl Write, identity: &SessionIdentity) -> io::Result<()> {
    match identity {
        SessionIdentity::Guest => writeln!(out, "Not logged in (Guest)"),
        SessionIdentity::Malformed { .. } => {
            writeln!(out, "Logged in (stored token unreadable)")
        }
        other => writeln!(out, "Logged in as {}", other.display_name()),
    }
}

/// Renders vault entries as aligned columns. Passwords are masked unless
/// `reveal` is set.
pub fn saved_passwords(
    out: &mut impl Write,
    entries: &[SavedPassword],
    reveal: bool,
) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No saved passwords.");
    }

    let rows: Vec<[&str; 4]> = entries
        .iter()
        .map(|entry| {
            [
                entry.id.as_deref().unwrap_or("-"),
                entry.title.as_str(),
                entry.username.as_str(),
                if reveal { entry.password.as_str() } else { MASK },
            ]
        })
        .collect();

    let header = ["ID", "TITLE", "USERNAME", "PASSWORD"];
    let mut widths = header.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    row(out, &header, &widths)?;
    for cells in &rows {
        row(out, cells, &widths)?;
    }
    Ok(())
}

fn row(out: &mut impl Write, cells: &[&str; 4], widths: &[usize; 4]) -> io::Result<()> {
    let [id, title, username, password] = cells;
    writeln!(
        out,
        "{id:<w0$}  {title:<w1$}  {username:<w2$}  {password}",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    )
}
