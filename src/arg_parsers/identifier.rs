use crate::arg_parse_err::ArgParseErr;

/// Keywords that would make the generated declarations fail to compile.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

/// Value parser for `clap`: accepts names usable as a C identifier.
pub fn parse_c_identifier(s: &str) -> Result<String, ArgParseErr> {
    let mut chars = s.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ArgParseErr::with_msg(format!(
            "`{s}' is not a valid C identifier"
        )));
    }
    if C_KEYWORDS.contains(&s) {
        return Err(ArgParseErr::with_msg(format!("`{s}' is a reserved C keyword")));
    }
    Ok(s.to_owned())
}
