// Console reporting: startup banner, policy switch notices and the
// continuously overwritten status line

use super::input::{KeyBindings, KeyCode};
use crate::socd::{CleaningPolicy, Direction, DirectionState};
use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Stdout, Write};

/// Status line body, e.g. `Raw: Left Right | Cleaned: Left | Method: Priority Direction`
pub fn status_line(
    raw: &DirectionState,
    cleaned: &DirectionState,
    policy: CleaningPolicy,
) -> String {
    format!("Raw: {} | Cleaned: {} | Method: {}", raw, cleaned, policy)
}

/// Notice printed when an operator switch key selects a policy
pub fn switch_notice(policy: CleaningPolicy) -> String {
    format!("Switched to {} cleaning", policy)
}

/// Two lines describing the controls for the given bindings
pub fn banner(bindings: &KeyBindings) -> [String; 2] {
    let movement: Vec<String> = Direction::ALL
        .iter()
        .filter_map(|direction| {
            let key = bindings.direction_keys(*direction).first()?;
            Some(format!("{}({})", key_label(*key), direction))
        })
        .collect();

    let switches: Vec<String> = CleaningPolicy::ALL
        .iter()
        .filter_map(|policy| {
            let key = bindings.switch_keys(*policy).first()?;
            Some(format!("'{}' for {} cleaning", key_label(*key), policy))
        })
        .collect();

    [
        format!(
            "SOCD Cleaner started. Use {}. Press Ctrl+C to exit.",
            movement.join(", ")
        ),
        format!("Press {}", switches.join(", ")),
    ]
}

/// Short key label: `KEY_A` becomes `A`
fn key_label(key: KeyCode) -> String {
    format!("{:?}", key).trim_start_matches("KEY_").to_string()
}

/// Terminal writer. Write errors are dropped; losing a status line is harmless.
pub struct Console<W: Write> {
    out: W,
}

impl Console<Stdout> {
    /// Console on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    /// Console on any writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the controls banner
    pub fn print_banner(&mut self, bindings: &KeyBindings) {
        for line in banner(bindings) {
            let _ = writeln!(self.out, "{}", line);
        }
        let _ = self.out.flush();
    }

    /// Print a switch notice on its own line, leaving the status line intact
    pub fn print_switch(&mut self, policy: CleaningPolicy) {
        let _ = writeln!(self.out, "\n{}", switch_notice(policy));
        let _ = self.out.flush();
    }

    /// Overwrite the current line with a fresh status line
    pub fn print_status(
        &mut self,
        raw: &DirectionState,
        cleaned: &DirectionState,
        policy: CleaningPolicy,
    ) {
        let line = status_line(raw, cleaned, policy);
        let _ = queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::UntilNewLine),
            Print(line)
        );
        let _ = self.out.flush();
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(directions: &[Direction]) -> DirectionState {
        DirectionState::from_held(directions)
    }

    fn output(console: &Console<Vec<u8>>) -> String {
        String::from_utf8_lossy(console.get_ref()).into_owned()
    }

    #[test]
    fn test_status_line() {
        let line = status_line(
            &held(&[Direction::Left, Direction::Right]),
            &held(&[Direction::Left]),
            CleaningPolicy::PriorityDirection,
        );
        assert_eq!(line, "Raw: Left Right | Cleaned: Left | Method: Priority Direction");
    }

    #[test]
    fn test_status_line_neutral() {
        let line = status_line(
            &DirectionState::NEUTRAL,
            &DirectionState::NEUTRAL,
            CleaningPolicy::Alternating,
        );
        assert_eq!(line, "Raw: Neutral | Cleaned: Neutral | Method: Alternating");
    }

    #[test]
    fn test_switch_notice() {
        assert_eq!(
            switch_notice(CleaningPolicy::LastInputPriority),
            "Switched to Last Input Priority cleaning"
        );
    }

    #[test]
    fn test_banner_lists_default_controls() {
        let [controls, switches] = banner(&KeyBindings::default());
        assert_eq!(
            controls,
            "SOCD Cleaner started. Use A(Left), D(Right), W(Up), S(Down). Press Ctrl+C to exit."
        );
        assert_eq!(
            switches,
            "Press 'N' for Neutral cleaning, 'L' for Last Input Priority cleaning, \
             'P' for Priority Direction cleaning, 'T' for Alternating cleaning"
        );
    }

    #[test]
    fn test_print_status_overwrites_line() {
        let mut console = Console::new(Vec::new());
        console.print_status(
            &held(&[Direction::Up]),
            &held(&[Direction::Up]),
            CleaningPolicy::Neutral,
        );

        let text = output(&console);
        assert!(text.ends_with("Raw: Up | Cleaned: Up | Method: Neutral"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_print_switch_starts_new_line() {
        let mut console = Console::new(Vec::new());
        console.print_switch(CleaningPolicy::Alternating);
        assert_eq!(output(&console), "\nSwitched to Alternating cleaning\n");
    }
}
