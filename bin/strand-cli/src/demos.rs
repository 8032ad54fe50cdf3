//! The twelve demonstrations, run in a fixed order.
//!
//! Each demonstration is independent: it builds its own values, compares
//! pairs for identity, and writes labeled observations to `out`. The intern
//! pool is the only shared state, and only
//! [`explicit_registration`] writes to it beyond literal resolution.

use std::io::{self, Write};

use strand_pool::InternPool;
use strand_text::{Text, TextBuf};

/// Every string literal the demonstrations embed.
///
/// `main` interns these up front, the way a managed runtime interns a
/// module's literal table at load time. Runtime-assembled contents such as
/// `"AABB"` and `"XYK"` are deliberately absent.
pub const LITERALS: &[&str] = &[
	"ABC\0DEF\0GHI\0",
	"ABCDEFGHI",
	"ABC",
	"DEF",
	"XYZ",
	"X",
	"Y",
	"Z",
	"A",
	"B",
	"C",
	"XY",
	"XYZABC",
	"AA",
	"BB",
];

/// Runs all twelve demonstrations in order.
pub fn run_all(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	embedded_null(pool, out)?;
	chars_are_independent(pool, out)?;
	replace_returns_new_identity(pool, out)?;
	append_reassigns_identity(pool, out)?;
	literal_identity_sharing(pool, out)?;
	buildup_bypasses_pool(pool, out)?;
	identity_tracks_last_assignment(pool, out)?;
	truncation_returns_new_identity(pool, out)?;
	pool_query_canonicalizes(pool, out)?;
	buffer_text_is_never_interned(pool, out)?;
	differing_content_distinct_entries(pool, out)?;
	explicit_registration(pool, out)?;
	Ok(())
}

/// Identity comparison lifted over query results.
///
/// Two absences compare equal, mirroring a null-sentinel reference
/// comparison in the runtime this models.
fn same_queried_identity(a: &Option<Text>, b: &Option<Text>) -> bool {
	match (a, b) {
		(Some(a), Some(b)) => Text::same_identity(a, b),
		(None, None) => true,
		_ => false,
	}
}

/// A text value can contain embedded NUL characters; length accounting
/// includes them.
fn embedded_null(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let text = pool.literal("ABC\0DEF\0GHI\0");

	writeln!(out, "String : {text}")?;
	writeln!(out, "Length : {}", text.len())?;
	Ok(())
}

/// A character vector copied out of a text value is fully independent:
/// mutating it leaves the original untouched.
fn chars_are_independent(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let text = pool.literal("ABCDEFGHI");
	let mut chars = text.chars_vec();

	chars[2] = 'J';

	writeln!(out, "String : {text}")?;
	for (i, ch) in chars.iter().enumerate() {
		writeln!(out, "chars[{i}] : {ch}")?;
	}
	Ok(())
}

/// Character substitution produces a new value with a new identity; both
/// originals keep their content and their shared identity.
fn replace_returns_new_identity(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let str1 = pool.literal("ABC");
	let str2 = pool.literal("ABC");

	writeln!(out, "str1 : {str1}")?;
	writeln!(out, "str2 : {str2}")?;
	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;

	let str3 = str2.replace_char('B', 'D');

	writeln!(out, "str1 : {str1}")?;
	writeln!(out, "str2 : {str2}")?;
	writeln!(out, "str3 : {str3}")?;
	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;
	writeln!(out, "str2 == str3 : {}", Text::same_identity(&str2, &str3))?;
	Ok(())
}

/// Concatenation-assignment rebinds the variable to a new allocation; the
/// sibling variable that shared the old identity is unaffected.
fn append_reassigns_identity(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let str1 = pool.literal("ABC");
	let mut str2 = pool.literal("ABC");

	writeln!(out, "str1 : {str1}")?;
	writeln!(out, "str2 : {str2}")?;
	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;

	str2 = str2.concat("DEF");

	writeln!(out, "str1 : {str1}")?;
	writeln!(out, "str2 : {str2}")?;
	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;
	Ok(())
}

/// Two variables assigned the same literal content directly share one
/// identity: both resolve to the same pool entry.
fn literal_identity_sharing(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let str1 = pool.literal("XYZ");
	let str2 = pool.literal("XYZ");

	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;
	Ok(())
}

/// A value assembled character by character at runtime never shares
/// identity with the equal-content literal: buildup bypasses the pool.
fn buildup_bypasses_pool(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let str1 = pool.literal("XYZ");

	let mut str2 = pool.literal("X");
	str2 = str2.concat("Y");
	str2 = str2.concat("Z");

	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;
	Ok(())
}

/// A variable's identity tracks its most recent assignment only:
/// alternating buildup and literal assignments flips the comparison
/// against a fixed reference value.
fn identity_tracks_last_assignment(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let str1 = pool.literal("XYZ");
	let mut str2 = pool.literal("XYZ");

	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;

	str2 = pool.literal("A");
	str2 = str2.concat("B");
	str2 = str2.concat("C");

	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;

	str2 = pool.literal("X");
	str2 = str2.concat("Y");
	str2 = str2.concat("Z");

	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;

	str2 = pool.literal("XYZ");

	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;
	Ok(())
}

/// Removing characters returns a new value; even when the remainder equals
/// a literal's content, the identities never match.
fn truncation_returns_new_identity(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let str1 = pool.literal("XYZ");
	let str2 = pool.literal("XYZABC");

	let str3 = str2.truncated(3);

	writeln!(out, "str1 == str3 : {}", Text::same_identity(&str1, &str3))?;
	Ok(())
}

/// Pool queries canonicalize: equal content yields identity-equal query
/// results even when the queried values themselves differ in identity.
fn pool_query_canonicalizes(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let str1 = pool.literal("XYZ");
	let mut str2 = pool.literal("XY");
	str2 = str2.concat("Z");

	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;

	let intern1 = pool.query(str1.as_str());
	let intern2 = pool.query(str2.as_str());

	writeln!(
		out,
		"intern1 == intern2 : {}",
		same_queried_identity(&intern1, &intern2)
	)?;
	Ok(())
}

/// Converting a buffer to text never auto-interns: the result's identity
/// never matches the equal-content literal, but the pool query still finds
/// the content because the literal's load-time interning put it there.
fn buffer_text_is_never_interned(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let str1 = pool.literal("XYZ");
	let mut buf = TextBuf::from("XY");
	buf.push('Z');
	let str2 = buf.to_text();

	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;

	let intern1 = pool.query(str1.as_str());
	let intern2 = pool.query(str2.as_str());

	writeln!(
		out,
		"intern1 == intern2 : {}",
		same_queried_identity(&intern1, &intern2)
	)?;
	Ok(())
}

/// With differing content there is no shared pool entry: one query hits,
/// the other comes back absent.
fn differing_content_distinct_entries(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let str1 = pool.literal("XYZ");
	let mut buf = TextBuf::from("XY");
	buf.push('K');
	let str2 = buf.to_text();

	writeln!(out, "str1 == str2 : {}", Text::same_identity(&str1, &str2))?;

	let intern1 = pool.query(str1.as_str());
	let intern2 = pool.query(str2.as_str());

	writeln!(
		out,
		"intern1 == intern2 : {}",
		same_queried_identity(&intern1, &intern2)
	)?;
	Ok(())
}

/// A runtime-built value's content is absent from the pool until it is
/// explicitly registered; afterwards the same query finds it.
fn explicit_registration(pool: &InternPool, out: &mut dyn Write) -> io::Result<()> {
	let mut text = pool.literal("AA");
	text = text.concat("BB");

	if pool.query(text.as_str()).is_none() {
		writeln!(out, "str is not interned")?;
	} else {
		writeln!(out, "str is interned")?;
	}

	pool.register(&text);

	if pool.query(text.as_str()).is_none() {
		writeln!(out, "str is not interned")?;
	} else {
		writeln!(out, "str is interned")?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const EXPECTED: &str = concat!(
		// embedded_null
		"String : ABC\0DEF\0GHI\0\n",
		"Length : 12\n",
		// chars_are_independent
		"String : ABCDEFGHI\n",
		"chars[0] : A\n",
		"chars[1] : B\n",
		"chars[2] : J\n",
		"chars[3] : D\n",
		"chars[4] : E\n",
		"chars[5] : F\n",
		"chars[6] : G\n",
		"chars[7] : H\n",
		"chars[8] : I\n",
		// replace_returns_new_identity
		"str1 : ABC\n",
		"str2 : ABC\n",
		"str1 == str2 : true\n",
		"str1 : ABC\n",
		"str2 : ABC\n",
		"str3 : ADC\n",
		"str1 == str2 : true\n",
		"str2 == str3 : false\n",
		// append_reassigns_identity
		"str1 : ABC\n",
		"str2 : ABC\n",
		"str1 == str2 : true\n",
		"str1 : ABC\n",
		"str2 : ABCDEF\n",
		"str1 == str2 : false\n",
		// literal_identity_sharing
		"str1 == str2 : true\n",
		// buildup_bypasses_pool
		"str1 == str2 : false\n",
		// identity_tracks_last_assignment
		"str1 == str2 : true\n",
		"str1 == str2 : false\n",
		"str1 == str2 : false\n",
		"str1 == str2 : true\n",
		// truncation_returns_new_identity
		"str1 == str3 : false\n",
		// pool_query_canonicalizes
		"str1 == str2 : false\n",
		"intern1 == intern2 : true\n",
		// buffer_text_is_never_interned
		"str1 == str2 : false\n",
		"intern1 == intern2 : true\n",
		// differing_content_distinct_entries
		"str1 == str2 : false\n",
		"intern1 == intern2 : false\n",
		// explicit_registration
		"str is not interned\n",
		"str is interned\n",
	);

	fn fresh_pool() -> InternPool {
		InternPool::with_literals(LITERALS.iter().copied())
	}

	#[test]
	fn test_transcript_is_stable() {
		let pool = fresh_pool();
		let mut out = Vec::new();
		run_all(&pool, &mut out).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
	}

	#[test]
	fn test_explicit_registration_flips_branch() {
		let pool = fresh_pool();
		let mut out = Vec::new();
		explicit_registration(&pool, &mut out).unwrap();
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"str is not interned\nstr is interned\n"
		);
	}

	#[test]
	fn test_registration_persists_across_demos() {
		let pool = fresh_pool();
		let mut out = Vec::new();
		explicit_registration(&pool, &mut out).unwrap();
		// The pool is append-only: a second pass sees "AABB" already
		// interned and takes the present branch both times.
		out.clear();
		explicit_registration(&pool, &mut out).unwrap();
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"str is interned\nstr is interned\n"
		);
	}

	#[test]
	fn test_queried_identity_lifts_absence() {
		let pool = fresh_pool();
		let hit = pool.query("XYZ");
		assert!(same_queried_identity(&None, &None));
		assert!(!same_queried_identity(&hit, &None));
	}
}
