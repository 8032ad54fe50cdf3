//! Binary entrypoint for the strand demonstrations.
//!
//! Seeds the intern pool with the program's literal table, then runs the
//! twelve demonstrations in order against stdout. Diagnostics go to stderr
//! so the observation transcript stays clean.

use std::io;

use anyhow::Result;
use strand_pool::InternPool;
use tracing_subscriber::EnvFilter;

mod demos;

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	let pool = InternPool::with_literals(demos::LITERALS.iter().copied());
	tracing::debug!(literals = demos::LITERALS.len(), "literal table seeded");

	let mut out = io::stdout().lock();
	demos::run_all(&pool, &mut out)?;
	Ok(())
}
