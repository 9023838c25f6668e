//! Line-oriented prompts for the interactive session.
//!
//! Every question is asked until it gets a valid answer. An empty answer
//! takes the default shown in brackets.

use std::io::{BufRead, Write};

use parabolic_config::{Mode, OptionDefaults, ParameterField};
use parabolic_core::{OptionType, ParameterSet};

use crate::error::{CliError, CliResult};

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over a reader/writer pair.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer prompts go to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter, returning the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, question: &str) -> CliResult<String> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn complain(&mut self, message: &str) -> CliResult<()> {
        writeln!(self.output, "Error: {message}.")?;
        Ok(())
    }

    /// Asks for the option type, `0` for a put and `1` for a call.
    pub fn ask_option_type(&mut self, default: OptionType) -> CliResult<OptionType> {
        let question = format!(
            "Option type (0 for put, 1 for call) [{}]",
            u8::from(default.is_call())
        );
        loop {
            let answer = self.ask(&question)?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<i64>().ok().and_then(OptionType::from_code) {
                Some(option_type) => return Ok(option_type),
                None => self.complain("enter 0 or 1")?,
            }
        }
    }

    /// Asks for one numeric contract input.
    pub fn ask_field(&mut self, field: ParameterField, default: f64) -> CliResult<f64> {
        let question = format!("{} [{default}]", field.label());
        loop {
            let answer = self.ask(&question)?;
            if answer.is_empty() {
                return Ok(default);
            }
            let Ok(value) = answer.parse::<f64>() else {
                self.complain("enter a number")?;
                continue;
            };
            match field.check(value) {
                Ok(value) => return Ok(value),
                Err(err) => self.complain(&err.message)?,
            }
        }
    }

    /// Asks for a complete contract.
    ///
    /// Every answer is checked as it is entered, so the final construction
    /// cannot fail on a range check.
    pub fn ask_parameters(&mut self, defaults: &OptionDefaults) -> CliResult<ParameterSet> {
        writeln!(self.output, "Enter the option parameters:")?;
        let option_type = self.ask_option_type(defaults.option_type)?;

        let mut values = [0.0; 5];
        for (slot, field) in values.iter_mut().zip(ParameterField::ALL) {
            *slot = self.ask_field(field, defaults.value(field))?;
        }

        let [spot, strike, rate, volatility, maturity] = values;
        Ok(parabolic_config::validate_parameters(
            option_type,
            spot,
            strike,
            rate,
            volatility,
            maturity,
        )?)
    }

    /// Shows the mode menu and reads a choice.
    ///
    /// Anything other than a listed code selects fast mode.
    pub fn ask_mode(&mut self) -> CliResult<Mode> {
        writeln!(self.output, "Choose a mode:")?;
        for mode in Mode::ALL {
            writeln!(self.output, "{}. {}", mode.code(), mode.description())?;
        }

        let answer = self.ask("Mode [2]")?;
        if answer.is_empty() {
            return Ok(Mode::Fast);
        }

        match answer.parse::<i64>().ok().and_then(Mode::try_from_code) {
            Some(mode) => Ok(mode),
            None => {
                writeln!(self.output, "Invalid mode, using fast mode.")?;
                Ok(Mode::Fast)
            }
        }
    }

    /// Asks for a positive number of spatial steps.
    pub fn ask_steps(&mut self) -> CliResult<usize> {
        loop {
            let answer = self.ask("Number of spatial steps (N)")?;
            match answer.parse::<usize>() {
                Ok(steps) if steps > 0 => return Ok(steps),
                _ => self.complain("N must be a positive integer")?,
            }
        }
    }
}
