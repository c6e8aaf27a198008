//! Internal-type-to-C-type translation policy

use crate::ast::nodes::DataType;

/// Size of the character buffer reserved for a string variable.
///
/// The source language's strings have no dynamic growth, so `char s[256];`
/// with a fixed size is the whole storage story. Inputs longer than the
/// buffer are a documented limitation, not a growth trigger.
pub const STRING_BUFFER_LEN: usize = 256;

/// C spelling of an internal type tag.
///
/// `Unit` is not resolved by tag alone: nodes carrying a unit type also
/// carry the unit's name, and the generator spells those `struct <name>`
/// directly. The `int` arm for `Unit` is only reachable when that name is
/// missing from a malformed node; it falls back rather than failing, and
/// the generator logs the fallback.
pub fn c_type(ty: DataType) -> &'static str {
    match ty {
        DataType::Int => "int",
        DataType::Float => "float",
        DataType::Char => "char",
        DataType::Str => "char*",
        DataType::IntArray => "int*",
        DataType::Unit => "int",
    }
}

/// scanf format specifier for a read target. The string width is one less
/// than [`STRING_BUFFER_LEN`], leaving room for the terminator.
pub fn scan_format(ty: DataType) -> &'static str {
    match ty {
        DataType::Float => "%f",
        DataType::Str => "%255s",
        _ => "%d",
    }
}
