use std::borrow::Cow;

/// Normalize decimal text bound for an integer parser.
///
/// An all-zero fraction is dropped (`"1.00"` -> `"1"`, `".0"` -> `"0"`). A
/// fraction with significant digits is kept so that the integer parse rejects
/// it. An empty integer part reads as `"0"`.
pub(crate) fn normalize_integer_text(text: &str) -> Cow<'_, str> {
	let Some((int_part, fraction)) = text.split_once('.') else {
		return Cow::Borrowed(text);
	};

	let int_part = if int_part.is_empty() { "0" } else { int_part };
	let fraction = fraction.trim_end_matches('0');
	if fraction.is_empty() {
		return Cow::Borrowed(int_part);
	}

	Cow::Owned(format!("{int_part}.{fraction}"))
}
