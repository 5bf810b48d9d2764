//! Prints heliocentric ephemerides for the built-in body table: a header
//! describing each body, one closed orbit track per body, then a two-year
//! position sweep. Rows are comma-separated and meant to be piped into a
//! plotting tool; an embedding renderer consumes the same hand-off.

mod trace;

use orrery_utils::OutputMode;
use trace::{dump_tracks, print_header, sweep, TraceError, SWEEP_SPAN, SWEEP_STEP};

fn main() -> Result<(), TraceError> {
    print_header();
    dump_tracks()?;
    sweep(OutputMode::Single(2), SWEEP_SPAN, SWEEP_STEP) // index 2 = Earth
}
