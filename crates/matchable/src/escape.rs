//! Escaping of variant names that are not valid Rust identifiers.
//!
//! A declared identifier such as `timed_spc_out` displays as `timed out`.
//! Each printable ASCII punctuation character (and space) has a short code
//! wrapped in underscores. An optional leading `esc_` lets identifiers start
//! with a digit or spell a reserved word (`esc_17` displays as `17`).

/// Prefix stripped from identifiers before unescaping.
pub const PREFIX: &str = "esc_";

/// Escape codes paired with the character they stand for.
pub const CODES: [(&str, char); 32] = [
	("_spc_", ' '),
	("_bng_", '!'),
	("_qt_", '"'),
	("_hsh_", '#'),
	("_dol_", '$'),
	("_pct_", '%'),
	("_amp_", '&'),
	("_sqt_", '\''),
	("_pl_", '('),
	("_pr_", ')'),
	("_ast_", '*'),
	("_pls_", '+'),
	("_cma_", ','),
	("_mns_", '-'),
	("_dot_", '.'),
	("_slsh_", '/'),
	("_cln_", ':'),
	("_scln_", ';'),
	("_lt_", '<'),
	("_eq_", '='),
	("_gt_", '>'),
	("_q_", '?'),
	("_at_", '@'),
	("_sbl_", '['),
	("_bslsh_", '\\'),
	("_sbr_", ']'),
	("_crt_", '^'),
	("_bqt_", '`'),
	("_cbl_", '{'),
	("_pip_", '|'),
	("_cbr_", '}'),
	("_tld_", '~'),
];

/// Returns the escape code for `ch`, if it has one.
pub fn escape_char(ch: char) -> Option<&'static str> {
	CODES.iter().find(|(_, c)| *c == ch).map(|(code, _)| *code)
}

/// Replaces every escapable character in `input` with its code.
pub fn escape_all(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match escape_char(ch) {
			Some(code) => out.push_str(code),
			None => out.push(ch),
		}
	}
	out
}

/// Replaces every escape code in `input` with its character.
pub fn unescape_all(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	let mut rest = input;
	while let Some(pos) = rest.find('_') {
		out.push_str(&rest[..pos]);
		rest = &rest[pos..];
		match CODES.iter().find(|(code, _)| rest.starts_with(code)) {
			Some((code, ch)) => {
				out.push(*ch);
				rest = &rest[code.len()..];
			}
			None => {
				out.push('_');
				rest = &rest[1..];
			}
		}
	}
	out.push_str(rest);
	out
}

/// Turns a declared identifier into its display name.
///
/// Strips a leading [`PREFIX`], then unescapes.
pub fn unescape_identifier(identifier: &str) -> String {
	unescape_all(identifier.strip_prefix(PREFIX).unwrap_or(identifier))
}

/// Turns a display name into an identifier that [`unescape_identifier`] maps
/// back to it.
///
/// Adds [`PREFIX`] when the escaped text is empty, starts with a digit, is a
/// Rust keyword or itself starts with the prefix. Identifiers are plain ASCII.
/// Returns `None` when no such identifier exists: the name holds a character
/// that has no escape code and is not an ASCII letter or digit, or literal
/// underscores in it would read back as escape codes.
pub fn escape_identifier(name: &str) -> Option<String> {
	let escaped = escape_all(name);
	if !escaped.chars().all(|c| c == '_' || c.is_ascii_alphanumeric()) {
		return None;
	}
	let needs_prefix = escaped.is_empty()
		|| escaped.starts_with(|c: char| c.is_ascii_digit())
		|| escaped.starts_with(PREFIX)
		|| escaped == "_"
		|| KEYWORDS.contains(&escaped.as_str());
	let identifier = if needs_prefix { format!("{PREFIX}{escaped}") } else { escaped };
	(unescape_identifier(&identifier) == name).then_some(identifier)
}

/// Strict and reserved keywords that cannot be used as plain identifiers.
const KEYWORDS: &[&str] = &[
	"Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
	"crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
	"impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
	"ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
	"unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];
