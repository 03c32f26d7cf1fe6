use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, BufRead, Write};

/// Ask a yes/no question; only `y` or `Y` counts as yes
///
/// End of input is treated as no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<bool> {
    queue!(
        out,
        Print("\n"),
        SetForegroundColor(Color::Yellow),
        Print(question),
        ResetColor
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
