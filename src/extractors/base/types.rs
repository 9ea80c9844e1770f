// Export Model Types
//
// All data structures produced by one header extraction run.
// Every entity is an immutable snapshot owned by its ProcessedHeader.

use serde::{Deserialize, Serialize};

/// An exported function declaration (`FOO_EXPORT int add(int a, int b);`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportFunction {
    /// Function name as declared
    pub name: String,
    /// Return type string, verbatim (may carry `const` and trailing `*`)
    pub return_type: String,
    /// Parameters in declaration order
    pub parameters: Vec<ExportParameter>,
}

/// A single `type name` pair from a parameter list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportParameter {
    #[serde(rename = "type")]
    pub param_type: String,
    pub name: String,
}

/// A `#define NAME value` constant
///
/// String literal values keep their surrounding quotes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConstant {
    pub name: String,
    pub value: String,
}

impl ExportConstant {
    /// Whether the value is a double-quoted string literal
    pub fn is_string_literal(&self) -> bool {
        self.value.len() >= 2 && self.value.starts_with('"') && self.value.ends_with('"')
    }
}

/// `typedef <ret> (*<name>)(<params>)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportFunctionPointerTypeDef {
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<ExportParameter>,
}

/// `enum <name> { ... };`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportEnum {
    pub name: String,
    /// Enumerators in declaration order
    pub values: Vec<ExportEnumValue>,
}

impl ExportEnum {
    /// Resolve enumerator values using C's auto-increment rule.
    ///
    /// The stored `value` strings are never rewritten; this is an opt-in view.
    /// Resolution starts at 0 and continues from the last explicit integer
    /// initializer. Once an initializer is not a plain integer literal
    /// (e.g. it names another enumerator), that value and every implicit
    /// value after it resolve to `None` until the next integer literal.
    pub fn resolved_values(&self) -> Vec<(&str, Option<i64>)> {
        let mut next = Some(0i64);
        self.values
            .iter()
            .map(|value| {
                let current = if value.value.is_empty() {
                    next
                } else {
                    parse_c_integer(&value.value)
                };
                next = current.and_then(|v| v.checked_add(1));
                (value.name.as_str(), current)
            })
            .collect()
    }
}

/// Parse a C integer literal (decimal, hex, octal, optional sign and suffix)
fn parse_c_integer(literal: &str) -> Option<i64> {
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };
    let digits = digits.trim_end_matches(['u', 'U', 'l', 'L']);

    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        i64::from_str_radix(&digits[1..], 8).ok()?
    } else {
        digits.parse::<i64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// A single enumerator; `value` is empty when no initializer was written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportEnumValue {
    pub name: String,
    pub value: String,
}

/// `typedef enum <original_type> <defined_type>;`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportEnumTypeDef {
    pub original_type: String,
    pub defined_type: String,
}

/// `struct <name> { ... };`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportStruct {
    pub name: String,
    pub fields: Vec<ExportStructField>,
}

/// A struct member. Fixed-size arrays keep their `[N]` suffix in `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportStructField {
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
}

impl ExportStructField {
    /// The bracketed size of a fixed-size array field (`buf[16]` -> `16`)
    pub fn array_size(&self) -> Option<&str> {
        let open = self.name.find('[')?;
        let close = self.name[open..].find(']')? + open;
        let size = &self.name[open + 1..close];
        (!size.is_empty()).then_some(size)
    }

    /// The field name without any array suffix
    pub fn base_name(&self) -> &str {
        match self.name.find('[') {
            Some(open) => &self.name[..open],
            None => &self.name,
        }
    }
}

/// `typedef struct <original_type> <defined_type>;`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportStructTypeDef {
    pub original_type: String,
    pub defined_type: String,
}

/// `typedef struct <original_type> { ... } <defined_type>;`
///
/// `original_type` is empty for an anonymous struct body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportTypeDefedStruct {
    pub original_type: String,
    pub defined_type: String,
    pub fields: Vec<ExportStructField>,
}

/// Root of the Export Model: everything extracted from one header
///
/// The sequences are independent of each other. Nothing checks that a type
/// named in one sequence is declared in another; see
/// [`crate::extractors::c::validation::validate_references`] for that.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessedHeader {
    pub functions: Vec<ExportFunction>,
    pub constants: Vec<ExportConstant>,
    pub function_pointer_typedefs: Vec<ExportFunctionPointerTypeDef>,
    pub enums: Vec<ExportEnum>,
    pub enum_typedefs: Vec<ExportEnumTypeDef>,
    pub structs: Vec<ExportStruct>,
    pub struct_typedefs: Vec<ExportStructTypeDef>,
    pub typedefed_structs: Vec<ExportTypeDefedStruct>,
}

impl ProcessedHeader {
    /// Total number of top-level entries across every sequence
    pub fn total_len(&self) -> usize {
        self.functions.len()
            + self.constants.len()
            + self.function_pointer_typedefs.len()
            + self.enums.len()
            + self.enum_typedefs.len()
            + self.structs.len()
            + self.struct_typedefs.len()
            + self.typedefed_structs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Pick functions by name, in the order the names are given.
    ///
    /// Unknown names are skipped. If a header declares the same name twice,
    /// the first declaration wins.
    pub fn select_functions<S: AsRef<str>>(&self, names: &[S]) -> Vec<&ExportFunction> {
        names
            .iter()
            .filter_map(|name| self.functions.iter().find(|f| f.name == name.as_ref()))
            .collect()
    }

    /// Pick constants by name, in the order the names are given
    pub fn select_constants<S: AsRef<str>>(&self, names: &[S]) -> Vec<&ExportConstant> {
        names
            .iter()
            .filter_map(|name| self.constants.iter().find(|c| c.name == name.as_ref()))
            .collect()
    }

    /// Serialize the whole model as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
