//! Interactive random movie picker
//!
//! Shows one random record at a time and asks whether to show another.
//! Input, output and the random source are injected so the loop runs the
//! same against a terminal or a scripted test.

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::types::MovieChart;

pub const PROMPT: &str = "Do you want another movie (y/[n])? ";
pub const FAREWELL_MESSAGE: &str = "Enjoy your movie!";
pub const NO_DATA_MESSAGE: &str = "Could not fetch movie data. Please try again later.";

pub struct Picker<R, W, G> {
    input: R,
    output: W,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Picker<R, W, G> {
    pub fn new(input: R, output: W, rng: G) -> Self {
        Self { input, output, rng }
    }

    /// Run the pick loop until the user declines
    ///
    /// An empty chart prints [`NO_DATA_MESSAGE`] and returns without
    /// prompting. End of input counts as declining.
    ///
    /// # Returns
    /// Number of records shown
    ///
    /// # Errors
    /// Returns `Io` if reading the answer or writing output fails
    pub fn run(&mut self, chart: &MovieChart) -> Result<usize> {
        let records = chart.records();
        if records.is_empty() {
            writeln!(self.output, "{}", NO_DATA_MESSAGE)?;
            return Ok(0);
        }

        let mut shown = 0;
        while let Some(idx) = pick_index(&mut self.rng, records.len()) {
            debug!(idx, "picked record");
            writeln!(self.output, "{}", records[idx])?;
            shown += 1;

            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                // No echoed newline at end of input
                writeln!(self.output)?;
                break;
            }
            if !wants_another(&answer) {
                break;
            }
        }

        writeln!(self.output, "{}", FAREWELL_MESSAGE)?;
        self.output.flush()?;
        Ok(shown)
    }

    pub fn into_parts(self) -> (R, W, G) {
        (self.input, self.output, self.rng)
    }
}

/// Uniform index in `[0, len)`, `None` for an empty range
pub fn pick_index<G: Rng>(rng: &mut G, len: usize) -> Option<usize> {
    (len > 0).then(|| rng.random_range(0..len))
}

/// Whether an answer asks for another movie: exactly "y" after
/// trimming and lowercasing
pub fn wants_another(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovieRecord;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn record(title: &str, rating: f64) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            year: "2000".to_string(),
            cast: "Someone".to_string(),
            rating,
        }
    }

    fn run_with(chart: &MovieChart, answers: &str, seed: u64) -> (usize, String) {
        let mut picker = Picker::new(
            Cursor::new(answers.as_bytes().to_vec()),
            Vec::new(),
            StdRng::seed_from_u64(seed),
        );
        let shown = picker.run(chart).unwrap();
        let (_, output, _) = picker.into_parts();
        (shown, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_empty_chart_prints_no_data() {
        let (shown, output) = run_with(&MovieChart::empty(), "y\n", 1);
        assert_eq!(shown, 0);
        assert_eq!(output, format!("{}\n", NO_DATA_MESSAGE));
        assert!(!output.contains(PROMPT));
    }

    #[test]
    fn test_single_record_three_times() {
        let chart = MovieChart::new(vec![record("Solo", 8.0)]);
        let (shown, output) = run_with(&chart, "y\ny\nn\n", 7);

        assert_eq!(shown, 3);
        let line = "Solo (2000), Rating: 8.0, Starring: Someone";
        assert_eq!(output.matches(line).count(), 3);
        assert_eq!(output.matches(PROMPT).count(), 3);
        assert!(output.ends_with(&format!("{}\n", FAREWELL_MESSAGE)));
    }

    #[test]
    fn test_exact_transcript() {
        let chart = MovieChart::new(vec![record("Solo", 9.0)]);
        let (_, output) = run_with(&chart, "n\n", 3);
        assert_eq!(
            output,
            format!(
                "Solo (2000), Rating: 9.0, Starring: Someone\n{}{}\n",
                PROMPT, FAREWELL_MESSAGE
            )
        );
    }

    #[test]
    fn test_answer_is_normalized() {
        let chart = MovieChart::new(vec![record("Solo", 8.0)]);
        let (shown, _) = run_with(&chart, "  Y  \n\tY\nyes\n", 11);
        assert_eq!(shown, 3);
    }

    #[test]
    fn test_empty_answer_stops() {
        let chart = MovieChart::new(vec![record("Solo", 8.0)]);
        let (shown, _) = run_with(&chart, "\ny\n", 11);
        assert_eq!(shown, 1);
    }

    #[test]
    fn test_end_of_input_stops() {
        let chart = MovieChart::new(vec![record("Solo", 8.0)]);
        let (shown, output) = run_with(&chart, "y\n", 5);
        assert_eq!(shown, 2);
        assert!(output.ends_with(&format!("{}\n{}\n", PROMPT, FAREWELL_MESSAGE)));
        assert!(!output.contains(&format!("{}{}", PROMPT, FAREWELL_MESSAGE)));
    }

    #[test]
    fn test_end_of_input_without_newline() {
        let chart = MovieChart::new(vec![record("Solo", 8.0)]);
        let (shown, output) = run_with(&chart, "y", 5);
        assert_eq!(shown, 2);
        assert!(output.ends_with(&format!("{}\n{}\n", PROMPT, FAREWELL_MESSAGE)));
    }

    #[test]
    fn test_same_seed_same_picks() {
        let chart = MovieChart::new((0..50).map(|i| record(&format!("M{}", i), 7.0)).collect());
        let answers = "y\ny\ny\ny\nn\n";
        assert_eq!(run_with(&chart, answers, 42), run_with(&chart, answers, 42));
    }

    #[test]
    fn test_pick_index_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_index(&mut rng, 0), None);
    }

    #[test]
    fn test_wants_another() {
        assert!(wants_another("y"));
        assert!(wants_another("Y\n"));
        assert!(wants_another(" y \r\n"));
        assert!(!wants_another(""));
        assert!(!wants_another("n"));
        assert!(!wants_another("yes"));
        assert!(!wants_another("yy"));
    }

    proptest! {
        #[test]
        fn prop_pick_index_in_range(len in 1usize..10_000, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..16 {
                let idx = pick_index(&mut rng, len).unwrap();
                prop_assert!(idx < len);
            }
        }

        #[test]
        fn prop_loop_stops_at_first_decline(
            answers in proptest::collection::vec(prop_oneof![Just("y"), Just("Y"), Just(" y "), Just("n"), Just(""), Just("no"), Just("x")], 0..12),
            seed in any::<u64>(),
        ) {
            let chart = MovieChart::new(vec![record("A", 8.0), record("B", 9.0)]);
            let script: String = answers.iter().map(|a| format!("{}\n", a)).collect();
            let (shown, _) = run_with(&chart, &script, seed);

            let expected = answers
                .iter()
                .position(|a| !wants_another(a))
                .map(|pos| pos + 1)
                .unwrap_or(answers.len() + 1);
            prop_assert_eq!(shown, expected);
        }

        #[test]
        fn prop_record_line_is_deterministic(title in "[A-Za-z ]{1,20}", tenths in 0u32..=100) {
            let r = record(&title, tenths as f64 / 10.0);
            prop_assert_eq!(r.to_string(), r.clone().to_string());
            let expected_rating = format!("Rating: {:.1},", tenths as f64 / 10.0);
            prop_assert!(r.to_string().contains(&expected_rating));
        }
    }
}
