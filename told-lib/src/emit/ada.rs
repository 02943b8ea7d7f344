//! Ada package generation for the TOLD test driver.
//!
//! Every request becomes one package specification with two constant tables, one for the input
//! fields and one for the expected output fields. The tables are indexed by the position of the
//! case inside the package, the original case numbers are kept as comments.

use super::{EmitRequest, Emitter};
use crate::{FieldGroup, NUM_INPUT_FIELDS, NUM_OUTPUT_FIELDS};
use std::io;
use std::io::Write;
use strum::IntoEnumIterator;

/// The default package name.
pub const DEFAULT_PACKAGE_NAME: &str = "Aero_Told_Data";

/// How many values are written per line of an aggregate.
const VALUES_PER_LINE: usize = 6;

/// The reserved words of Ada 2012, these cannot be used as identifiers.
const RESERVED_WORDS: [&str; 73] = [
    "abort", "abs", "abstract", "accept", "access", "aliased", "all", "and", "array", "at",
    "begin", "body", "case", "constant", "declare", "delay", "delta", "digits", "do", "else",
    "elsif", "end", "entry", "exception", "exit", "for", "function", "generic", "goto", "if", "in",
    "interface", "is", "limited", "loop", "mod", "new", "not", "null", "of", "or", "others", "out",
    "overriding", "package", "pragma", "private", "procedure", "protected", "raise", "range",
    "record", "rem", "renames", "requeue", "return", "reverse", "select", "separate", "some",
    "subtype", "synchronized", "tagged", "task", "terminate", "then", "type", "until", "use",
    "when", "while", "with", "xor",
];

/// Emits Ada package specifications.
#[derive(Clone, Debug)]
pub struct AdaEmitter {
    package_name: String,
}

impl Default for AdaEmitter {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
        }
    }
}

impl AdaEmitter {
    /// A new emitter using the given package name. Returns `None` if the name is not a valid
    /// Ada identifier.
    pub fn new(package_name: &str) -> Option<Self> {
        is_valid_identifier(package_name).then(|| Self {
            package_name: package_name.to_string(),
        })
    }

    /// The package name as configured, without a part number.
    pub fn base_name(&self) -> &str {
        &self.package_name
    }

    /// The package name for a request: with multiple parts, the part number is appended.
    pub fn package_name(&self, request: &EmitRequest<'_>) -> String {
        if request.part.count > 1 {
            format!("{}_{}", self.package_name, request.part.current)
        } else {
            self.package_name.clone()
        }
    }

    /// Write one of the two constant tables.
    fn write_table<W: Write>(
        &self,
        request: &EmitRequest<'_>,
        group: FieldGroup,
        out: &mut W,
    ) -> io::Result<()> {
        let (table_name, type_name) = match group {
            FieldGroup::Input => ("Inputs", "Input_Table"),
            FieldGroup::Output => ("Outputs", "Output_Table"),
        };

        writeln!(out, "   {table_name} : constant {type_name} (1 .. Case_Count) :=")?;

        for (idx, case) in request.cases.iter().enumerate() {
            let open = if idx == 0 { "(" } else { " " };
            writeln!(out, "     {open}--  case {}", case.number())?;
            writeln!(out, "      {} =>", idx + 1)?;

            let values = case.group(group);
            for (line_idx, line) in values.chunks(VALUES_PER_LINE).enumerate() {
                let open = if line_idx == 0 { "(" } else { " " };
                let literals = line
                    .iter()
                    .map(|value| real_literal(*value))
                    .collect::<Vec<_>>()
                    .join(", ");

                let is_last_line = (line_idx + 1) * VALUES_PER_LINE >= values.len();
                let close = match (is_last_line, idx + 1 == request.cases.len()) {
                    (false, _) => ",",
                    (true, false) => "),",
                    (true, true) => "));",
                };

                writeln!(out, "         {open}{literals}{close}")?;
            }
        }

        Ok(())
    }
}

impl Emitter for AdaEmitter {
    fn emit<W: Write>(&self, request: &EmitRequest<'_>, out: &mut W) -> io::Result<()> {
        let package_name = self.package_name(request);

        writeln!(out, "--  Aero TOLD test data for the TOLD test driver.")?;
        writeln!(out, "--  Generated from: {}", request.header)?;
        writeln!(
            out,
            "--  Test cases {} .. {} (part {} of {})",
            request.first_case(),
            request.last_case(),
            request.part.current,
            request.part.count
        )?;
        writeln!(out, "--  Do not edit, this file is generated.")?;
        writeln!(out)?;
        writeln!(out, "package {package_name} is")?;
        writeln!(out)?;
        writeln!(out, "   Num_Input_Fields  : constant := {NUM_INPUT_FIELDS};")?;
        writeln!(out, "   Num_Output_Fields : constant := {NUM_OUTPUT_FIELDS};")?;
        writeln!(out, "   Case_Count        : constant := {};", request.cases.len())?;
        writeln!(out, "   First_Case_Number : constant := {};", request.first_case())?;
        writeln!(out)?;
        writeln!(
            out,
            "   type Input_Record is array (1 .. Num_Input_Fields) of Float;"
        )?;
        writeln!(
            out,
            "   type Output_Record is array (1 .. Num_Output_Fields) of Float;"
        )?;
        writeln!(
            out,
            "   type Input_Table is array (Positive range <>) of Input_Record;"
        )?;
        writeln!(
            out,
            "   type Output_Table is array (Positive range <>) of Output_Record;"
        )?;

        for group in FieldGroup::iter() {
            writeln!(out)?;
            writeln!(out, "   --  {group} fields:")?;
            for names in group.names().chunks(VALUES_PER_LINE) {
                writeln!(out, "   --    {}", names.join(", "))?;
            }
            self.write_table(request, group, out)?;
        }

        writeln!(out)?;
        writeln!(out, "end {package_name};")?;

        Ok(())
    }
}

/// Format a value as an Ada real literal: the shortest representation that reads back to the
/// same value, always with a decimal point.
pub fn real_literal(value: f64) -> String {
    let mut literal = value.to_string();

    if !literal.contains('.') {
        literal.push_str(".0");
    }

    literal
}

/// Check if the name is a valid Ada identifier: starts with a letter, contains only letters,
/// digits and single underscores, does not end with an underscore and is no reserved word
/// (compared case-insensitively, like Ada does).
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    !name.ends_with('_')
        && !name.contains("__")
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_reserved_word(name)
}

fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}
