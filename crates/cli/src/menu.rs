//! Interactive menu over a line-oriented reader and a writer.
//!
//! Tokens are read whitespace-separated across lines. A malformed token
//! cancels the current operation and drops the rest of the pending line;
//! end of input ends the session cleanly.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use figures::prelude::*;

const MENU: &str = "Menu:
 1 - Add figure
 2 - Print all figures
 3 - Total area
 4 - Erase figure by index
 0 - Exit
Choose: ";

pub struct Menu<R, W> {
    input: R,
    out: W,
    pending: VecDeque<String>,
    figures: DynamicArray<FigureSlot<f64>>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, capacity: usize) -> Self {
        Self {
            input,
            out,
            pending: VecDeque::new(),
            figures: DynamicArray::with_capacity(capacity),
        }
    }

    #[cfg(test)]
    pub fn figures(&self) -> &DynamicArray<FigureSlot<f64>> {
        &self.figures
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.out, "{MENU}")?;
            self.out.flush()?;
            let Some(tok) = self.next_token()? else {
                tracing::info!(count = self.figures.size(), "end_of_input");
                writeln!(self.out)?;
                return Ok(());
            };
            match tok.parse::<u32>() {
                Ok(0) => {
                    writeln!(self.out, "Bye.")?;
                    return Ok(());
                }
                Ok(1) => self.add()?,
                Ok(2) => self.print_all()?,
                Ok(3) => self.total()?,
                Ok(4) => self.erase()?,
                _ => {
                    tracing::debug!(token = %tok, "unknown_command");
                    self.pending.clear();
                    writeln!(self.out, "Unknown command.\n")?;
                }
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(Some(tok));
            }
            let mut line = String::new();
            let n = self
                .input
                .read_line(&mut line)
                .context("reading menu input")?;
            if n == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn add(&mut self) -> Result<()> {
        write!(
            self.out,
            "Figure type:\n 5 - Pentagon\n 6 - Hexagon\n 8 - Octagon\nEnter 5/6/8: "
        )?;
        self.out.flush()?;
        let Some(code) = self.next_token()? else {
            return Ok(());
        };
        // an unreadable type cancels before any coordinates are consumed
        let kind = match code.parse::<PolygonKind>() {
            Err(err @ FigureError::ParseFailure { .. }) => {
                tracing::warn!(%err, "figure_rejected");
                self.pending.clear();
                writeln!(self.out, "Invalid input, operation cancelled.")?;
                return Ok(());
            }
            parsed => parsed,
        };
        write!(self.out, "Enter center and radius (cx cy r): ")?;
        self.out.flush()?;
        let mut args = Vec::with_capacity(3);
        for _ in 0..3 {
            match self.next_token()? {
                Some(tok) => args.push(tok),
                None => return Ok(()),
            }
        }

        let kind = match kind {
            Ok(kind) => kind,
            Err(err) => {
                tracing::warn!(%err, "figure_rejected");
                writeln!(self.out, "Unknown figure type.\n")?;
                return Ok(());
            }
        };
        match kind.read::<f64, _>(&mut args.iter().map(String::as_str)) {
            Ok(figure) => {
                self.figures.push_back(Some(figure));
                tracing::info!(
                    kind = kind.name(),
                    count = self.figures.size(),
                    capacity = self.figures.capacity(),
                    "figure_added"
                );
                writeln!(
                    self.out,
                    "Figure added. Count: {}\n",
                    self.figures.size()
                )?;
            }
            Err(err @ FigureError::ParseFailure { .. }) => {
                tracing::warn!(%err, "figure_rejected");
                self.pending.clear();
                writeln!(self.out, "Invalid input, operation cancelled.")?;
            }
            Err(err) => {
                tracing::warn!(%err, "figure_rejected");
                writeln!(self.out, "Failed to create figure: {err}")?;
            }
        }
        Ok(())
    }

    fn print_all(&mut self) -> Result<()> {
        if self.figures.is_empty() {
            writeln!(self.out, "Figure array is empty.\n")?;
            return Ok(());
        }
        writeln!(self.out, "Figures:")?;
        for (i, slot) in self.figures.iter().enumerate() {
            writeln!(self.out, "=== Figure #{i} ===")?;
            match slot {
                Some(figure) => writeln!(self.out, "{figure}")?,
                None => writeln!(self.out, "Empty slot\n")?,
            }
        }
        Ok(())
    }

    fn total(&mut self) -> Result<()> {
        let sum = total_area(&self.figures);
        tracing::debug!(total = sum, count = self.figures.size(), "total_area");
        writeln!(self.out, "Total area of all figures: {sum}\n")?;
        Ok(())
    }

    fn erase(&mut self) -> Result<()> {
        if self.figures.is_empty() {
            writeln!(self.out, "Array is empty, nothing to erase.\n")?;
            return Ok(());
        }
        write!(
            self.out,
            "Enter index to erase (0..{}): ",
            self.figures.size() - 1
        )?;
        self.out.flush()?;
        let Some(tok) = self.next_token()? else {
            return Ok(());
        };
        let Ok(index) = tok.parse::<usize>() else {
            self.pending.clear();
            writeln!(self.out, "Invalid index.")?;
            return Ok(());
        };
        match self.figures.erase(index) {
            Ok(_) => {
                tracing::info!(index, count = self.figures.size(), "figure_erased");
                writeln!(
                    self.out,
                    "Figure erased. Count: {}\n",
                    self.figures.size()
                )?;
            }
            Err(err) => {
                tracing::warn!(%err, index, "erase_rejected");
                writeln!(self.out, "Error: {err}\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> (String, usize, f64) {
        let mut out = Vec::new();
        let mut menu = Menu::new(script.as_bytes(), &mut out, 0);
        menu.run().unwrap();
        let count = menu.figures().size();
        let total = total_area(menu.figures());
        drop(menu);
        (String::from_utf8(out).unwrap(), count, total)
    }

    #[test]
    fn add_print_total_erase_exit() {
        let script = "1\n5\n0 0 1\n1\n6 1 1 2\n2\n3\n4\n0\n0\n";
        let (out, count, total) = session(script);
        assert!(out.contains("Figure added. Count: 1"));
        assert!(out.contains("Figure added. Count: 2"));
        assert!(out.contains("=== Figure #1 ==="));
        assert!(out.contains("5-gon") && out.contains("6-gon"));
        assert!(out.contains("Total area of all figures: "));
        assert!(out.contains("Figure erased. Count: 1"));
        assert!(out.trim_end().ends_with("Bye."));
        assert_eq!(count, 1);
        // the pentagon was erased, the hexagon (r = 2) remains
        let hex = 0.5 * 6.0 * 4.0 * (std::f64::consts::TAU / 6.0).sin();
        assert!((total - hex).abs() < 1e-6);
    }

    #[test]
    fn bad_input_cancels_but_keeps_looping() {
        let script = "1\n7\n0 0 1\n1\n5\n0 0 -1\n1\n8\n0 x 1\n9\n3\n";
        let (out, count, total) = session(script);
        assert!(out.contains("Unknown figure type."));
        assert!(out.contains("Failed to create figure: invalid argument"));
        assert!(out.contains("Invalid input, operation cancelled."));
        assert!(out.contains("Unknown command."));
        assert!(out.contains("Total area of all figures: 0"));
        assert_eq!(count, 0);
        assert!(total == 0.0 && total.is_sign_positive());
    }

    #[test]
    fn erase_reports_out_of_range() {
        let script = "4\n1\n8 0 0 3\n4\n5\n4\nabc\n2\n";
        let (out, count, _) = session(script);
        assert!(out.contains("Array is empty, nothing to erase."));
        assert!(out.contains("Error: index 5 out of range (size is 1)"));
        assert!(out.contains("Invalid index."));
        assert!(out.contains("8-gon"));
        assert_eq!(count, 1);
    }

    #[test]
    fn unreadable_type_does_not_eat_later_commands() {
        let (out, count, _) = session("1\nabc\n2\n1\nsquare 0 0 1\n0\n");
        assert_eq!(
            out.matches("Invalid input, operation cancelled.").count(),
            2
        );
        assert!(out.contains("Figure array is empty."));
        assert!(!out.contains("Enter center and radius"));
        assert!(out.trim_end().ends_with("Bye."));
        assert_eq!(count, 0);
    }

    #[test]
    fn empty_total_prints_plain_zero() {
        let (out, _, _) = session("3\n0\n");
        assert!(out.contains("Total area of all figures: 0\n"));
        assert!(!out.contains("-0"));
    }

    #[test]
    fn print_empty_array() {
        let (out, _, _) = session("2\n0\n");
        assert!(out.contains("Figure array is empty."));
    }
}
