//! Time-sweep driver over the built-in body table. Produces the two data
//! products an external renderer needs: closed orbit tracks (polylines) and
//! per-step positions (scene transforms), both as plain stdout rows.

use orrery_propagator::bodies::{Body, BODIES};
use orrery_propagator::{ConvergenceError, SampleError};
use orrery_utils::OutputMode;

/// how far the position sweep runs, seconds.
pub const SWEEP_SPAN: f64 = 86400.0 * 365.25 * 2.0; // two earth years
/// spacing between printed rows, seconds.
pub const SWEEP_STEP: f64 = 43200.0; // half a day
/// samples per orbit track; enough that the plotted curve reads as smooth.
pub const TRACK_SAMPLES: usize = 360;

/// Anything that can stop a trace run. Carried up to main unchanged.
#[derive(Debug)]
pub enum TraceError {
    BadBodyIndex(usize),
    BadSampleCount(usize),
    SolverFailure(ConvergenceError),
}

impl From<ConvergenceError> for TraceError {
    fn from(value: ConvergenceError) -> Self {
        Self::SolverFailure(value)
    }
}

impl From<SampleError> for TraceError {
    fn from(value: SampleError) -> Self {
        match value {
            SampleError::BadSampleCount(count) => Self::BadSampleCount(count),
            SampleError::Convergence(inner) => Self::SolverFailure(inner),
        }
    }
}

fn shortcode(body: &Body) -> String {
    // three-letter tag used as the row key, e.g. MER / EAR / JUP.
    body.name[..3].to_uppercase()
}

/// one comment line per body so downstream plots can label and scale markers.
pub fn print_header() {
    for body in BODIES.iter() {
        println!(
            "# {}\t{}\tradius_m={:.4e}\ta_m={:.6e}",
            shortcode(body),
            body.name,
            body.radius,
            body.elements.semi_major_axis
        );
    }
}

/// prints each body's closed orbit curve, one track per body. The renderer
/// joins the last sample back to the first.
pub fn dump_tracks() -> Result<(), TraceError> {
    for body in BODIES.iter() {
        println!("# track {}", shortcode(body));
        for point in body.elements.sample_trajectory(TRACK_SAMPLES)? {
            println!("{}, {}, {}, {}", shortcode(body), point.0, point.1, point.2);
        }
    }
    Ok(())
}

/// sweeps time across the table and prints propagated positions. Also keeps
/// a running check that the analytic states respect the vis-viva energy, and
/// reports the worst deviation at the end.
pub fn sweep(mode: OutputMode, span: f64, step: f64) -> Result<(), TraceError> {
    let selected: Vec<&Body> = match mode {
        OutputMode::Single(index) => match BODIES.get(index) {
            Some(body) => vec![body],
            None => {
                println!("Trying to trace an invalid body!");
                return Err(TraceError::BadBodyIndex(index));
            }
        },
        OutputMode::All => BODIES.iter().collect(),
    };

    #[allow(clippy::as_conversions)]
    // span and step are positive consts; the quotient is far below usize::MAX.
    let steps = (span / step) as usize;
    let mut worst_energy_deviation: f64 = 0.0;

    for count in 0..=steps {
        #[allow(clippy::as_conversions)] // bounded by steps, which fits f64 exactly.
        let time = count as f64 * step;

        for &body in selected.iter() {
            let state = body.elements.propagate(time)?;
            println!(
                "{}, {}, {}, {}",
                shortcode(body),
                state.position.0,
                state.position.1,
                state.position.2
            );

            // vis-viva says specific energy is -mu/2a everywhere on the orbit;
            // any drift here is numerical, so it doubles as a solver check.
            let expected = -body.elements.mu / (2.0 * body.elements.semi_major_axis);
            let deviation = ((state.specific_energy(body.elements.mu) - expected) / expected).abs();
            worst_energy_deviation = worst_energy_deviation.max(deviation);
        }
    }

    println!("# max energy deviation: {worst_energy_deviation:.3e}");
    Ok(())
}
