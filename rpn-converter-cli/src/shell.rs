use anyhow::{Context, Result};
use log::{info, warn};
use rpn_converter::interpreter::error::{ErrorKind, RpnError};
use rpn_converter::interpreter::{convert, convert_to_infix, evaluate, is_valid_rpn};
use std::io::{BufRead, Write};

const PROMPT: &str = "RPN> ";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// A line typed into the interactive session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Help,
    Clear,
    Blank,
    Expression(&'a str),
}

impl<'a> Command<'a> {
    fn from_line(line: &'a str) -> Command<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Blank;
        }
        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" => Command::Quit,
            "help" => Command::Help,
            "clear" => Command::Clear,
            _ => Command::Expression(line.trim_end_matches(['\r', '\n'])),
        }
    }
}

/// Reads commands and expressions from `input` and reports on `output`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    show_tree: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, show_tree: bool) -> Shell<R, W> {
        Shell {
            input,
            output,
            show_tree,
        }
    }

    pub fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "=== RPN Calculator ===")?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Converts Reverse Polish Notation to readable math expressions"
        )?;
        writeln!(self.output, "Supports: +, -, *, / with integers and decimals")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Runs until `quit`, `exit` or the end of the input.
    pub fn run_interactive(&mut self) -> Result<()> {
        self.print_examples()?;

        let mut line = String::new();
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush().context("Failed to flush prompt")?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input line")?;
            if read == 0 {
                info!("end of input reached");
                writeln!(self.output)?;
                return self.print_farewell();
            }

            match Command::from_line(&line) {
                Command::Blank => continue,
                Command::Quit => return self.print_farewell(),
                Command::Help => self.print_help()?,
                Command::Clear => {
                    write!(self.output, "{}", CLEAR_SCREEN)?;
                    self.print_examples()?;
                }
                Command::Expression(expression) => {
                    self.process_expression(expression)?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    /// Prints the infix form and value of `expression`, or why it could not be processed.
    ///
    /// Only I/O failures are returned; problems with the expression are reported on the output.
    pub fn process_expression(&mut self, expression: &str) -> Result<()> {
        writeln!(self.output, "Input: {}", expression)?;

        if !is_valid_rpn(expression) {
            writeln!(
                self.output,
                "Hmm, that doesn't look like valid RPN. Check your syntax!"
            )?;
            writeln!(
                self.output,
                "Remember: operands first, then operators (e.g., '3 4 +' not '3 + 4')"
            )?;
            return Ok(());
        }

        let infix = match convert_to_infix(expression) {
            Ok(infix) => infix,
            Err(error) => {
                warn!("conversion failed after validation: {}", error);
                return self.report_failure(&error);
            }
        };
        writeln!(self.output, "Math:  {}", infix)?;

        if self.show_tree {
            if let Ok(tree) = convert(expression) {
                write!(self.output, "{}", tree)?;
            }
        }

        match evaluate(expression) {
            Ok(result) => writeln!(self.output, "= {}", format_result(result))?,
            Err(error) if error.kind() == ErrorKind::Internal => self.report_failure(&error)?,
            Err(error) => writeln!(
                self.output,
                "= Error: {}",
                describe_evaluation_error(&error)
            )?,
        }
        Ok(())
    }

    /// Reports an error that stopped an expression from being processed.
    fn report_failure(&mut self, error: &RpnError) -> Result<()> {
        if error.kind() == ErrorKind::Internal {
            writeln!(self.output, "Something went wrong: {}", error)?;
            writeln!(self.output, "Please report this if it keeps happening!")?;
        } else {
            writeln!(self.output, "Oops: {}", error)?;
        }
        Ok(())
    }

    fn print_farewell(&mut self) -> Result<()> {
        writeln!(self.output, "Thanks for using the RPN Calculator!")?;
        Ok(())
    }

    fn print_examples(&mut self) -> Result<()> {
        writeln!(self.output, "Try these examples:")?;
        writeln!(self.output, "  3 4 +                    (simple addition)")?;
        writeln!(self.output, "  3 4 + 2 *                (order of operations)")?;
        writeln!(
            self.output,
            "  15 7 1 1 + - / 3 * 2 1 1 + + -    (complex expression)"
        )?;
        writeln!(self.output)?;
        writeln!(self.output, "Type 'help' for more info, 'quit' to exit")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn print_help(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Help ===")?;
        writeln!(
            self.output,
            "RPN (Reverse Polish Notation) puts operators after operands:"
        )?;
        writeln!(self.output, "  Instead of: 3 + 4")?;
        writeln!(self.output, "  Write: 3 4 +")?;
        writeln!(self.output)?;
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  help  - Show this help")?;
        writeln!(self.output, "  clear - Clear screen")?;
        writeln!(self.output, "  quit  - Exit program")?;
        writeln!(self.output)?;
        Ok(())
    }
}

fn describe_evaluation_error(error: &RpnError) -> String {
    match error.kind() {
        ErrorKind::DivisionByZero => "Can't divide by zero!".to_string(),
        _ => error.to_string(),
    }
}

/// Whole numbers are shown without decimals, everything else in its shortest exact form.
pub fn format_result(value: f64) -> String {
    if value == value.floor() {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
