use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::case::Converter;

/// Runs a converter over a batch of inputs, writing one result per line
pub struct Pipeline {
    converter: Converter,
}

impl Pipeline {
    pub fn new(converter: Converter) -> Self {
        Pipeline { converter }
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Convert every input string and write the results to `writer`
    pub fn run<W: Write>(&self, inputs: &[String], writer: &mut W) -> Result<usize> {
        for input in inputs {
            self.write_line(input, writer)?;
        }

        tracing::info!(count = inputs.len(), case = %self.converter.case, "converted inputs");
        Ok(inputs.len())
    }

    /// Convert `reader` line by line and write the results to `writer`
    pub fn run_reader<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> Result<usize> {
        let mut count = 0;

        for line in reader.lines() {
            let line = line.with_context(|| format!("Failed to read input line {}", count + 1))?;
            self.write_line(&line, writer)?;
            count += 1;
        }

        tracing::info!(count, case = %self.converter.case, "converted input lines");
        Ok(count)
    }

    fn write_line<W: Write>(&self, input: &str, writer: &mut W) -> Result<()> {
        let output = self.converter.convert(input);
        tracing::debug!(input, output = %output, "converted");
        writeln!(writer, "{}", output).with_context(|| "Failed to write output")
    }
}
