//! DllImport binding generation
//!
//! Renders selected [`ExportFunction`]s as C# P/Invoke declarations. Types are
//! copied verbatim from the extracted model; nothing is translated or checked.

use crate::extractors::base::ExportFunction;

/// Library identifier emitted in every attribute line. The surrounding code is
/// expected to declare it (e.g. `const string LibName = "mylib";`).
pub const LIB_NAME_PLACEHOLDER: &str = "LibName";

/// Calling convention emitted in every attribute line
pub const CALLING_CONVENTION: &str = "CallingConvention.Cdecl";

/// Generator for `[DllImport]` declaration pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct BindingGenerator;

impl BindingGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Two lines per function, in the order given
    pub fn generate<'a, I>(&self, functions: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a ExportFunction>,
    {
        let mut lines = Vec::new();
        for function in functions {
            lines.push(attribute_line());
            lines.push(extern_line(function));
        }
        lines
    }

    /// [`generate`](Self::generate) joined with `\n`
    pub fn render<'a, I>(&self, functions: I) -> String
    where
        I: IntoIterator<Item = &'a ExportFunction>,
    {
        self.generate(functions).join("\n")
    }
}

fn attribute_line() -> String {
    format!("[DllImport({LIB_NAME_PLACEHOLDER}, CallingConvention = {CALLING_CONVENTION})]")
}

fn extern_line(function: &ExportFunction) -> String {
    let parameters = function
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.param_type, p.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "public static extern {} {}({});",
        function.return_type, function.name, parameters
    )
}
