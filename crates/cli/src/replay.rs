//! Replays JSON-lines snapshots through a signal registry.

use anyhow::Result;
use hft_alpha_core::MarketData;
use hft_alpha_signals::SignalRegistry;
use std::io::{BufRead, Write};

/// Counters reported at the end of a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Frames evaluated
    pub frames: u64,
    /// Lines that could not be parsed
    pub skipped: u64,
    /// Readings written
    pub readings: u64,
}

/// Reads one frame per line, evaluates every signal, and writes one JSON
/// reading per signal per frame. Blank lines are ignored; lines that are not
/// UTF-8 or not a valid snapshot are logged and skipped.
///
/// # Errors
/// Returns an error if reading the input or writing the output fails.
pub fn run<R: BufRead, W: Write>(
    registry: &mut SignalRegistry,
    reader: R,
    mut writer: W,
) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (line_no, bytes) in reader.split(b'\n').enumerate() {
        let line = match String::from_utf8(bytes?) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(line = line_no + 1, error = %e, "Skipping non-UTF-8 line");
                stats.skipped += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let frame: MarketData = match serde_json::from_str(&line) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!(line = line_no + 1, error = %e, "Skipping malformed snapshot");
                stats.skipped += 1;
                continue;
            }
        };

        stats.frames += 1;
        for reading in registry.evaluate_all(&frame) {
            serde_json::to_writer(&mut writer, &reading)?;
            writer.write_all(b"\n")?;
            stats.readings += 1;
        }
    }

    writer.flush()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hft_alpha_core::AlphaReading;
    use hft_alpha_signals::{BasicImbalanceSignal, MomentumSignal, StatisticalArbSignal};

    fn registry() -> SignalRegistry {
        let mut registry = SignalRegistry::new();
        registry.register(Box::new(BasicImbalanceSignal::new()));
        registry.register(Box::new(MomentumSignal::new(1, 2).unwrap()));
        registry
    }

    fn parse_output(output: &[u8]) -> Vec<AlphaReading> {
        std::str::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn writes_one_reading_per_signal_per_frame() {
        let input = r#"{"bids": [[99.5, 3]], "asks": [[100.5, 1]], "timestamp": 1}
{"bids": [[100.5, 1]], "asks": [[101.5, 1]], "timestamp": 2}
"#;
        let mut output = Vec::new();
        let stats = run(&mut registry(), input.as_bytes(), &mut output).unwrap();

        assert_eq!(
            stats,
            ReplayStats {
                frames: 2,
                skipped: 0,
                readings: 4
            }
        );

        let readings = parse_output(&output);
        assert_eq!(readings[0], AlphaReading::new("basic_imbalance", Some(2.0), Some(1.0)));
        assert_eq!(readings[1], AlphaReading::new("momentum", None, Some(1.0)));
        // mids [100, 101]: mean([101]) - mean([100, 101])
        assert_eq!(readings[3], AlphaReading::new("momentum", Some(0.5), Some(2.0)));
    }

    #[test]
    fn malformed_and_blank_lines_are_skipped() {
        let input = "not json\n\n{\"bids\": [], \"asks\": [], \"timestamp\": 3}\n[1, 2]\n";
        let mut output = Vec::new();
        let stats = run(&mut registry(), input.as_bytes(), &mut output).unwrap();

        assert_eq!(stats.frames, 1);
        assert_eq!(stats.skipped, 2);
        assert_eq!(parse_output(&output)[0].value, Some(0.0));
    }

    #[test]
    fn non_utf8_line_is_skipped_and_replay_continues() {
        let mut input = b"{\"bids\": [[9, 2]], \"asks\": [[10, 1]], \"timestamp\": 1}\n".to_vec();
        input.extend_from_slice(b"\xff\xfe garbage\n");
        input.extend_from_slice(b"{\"bids\": [[9, 1]], \"asks\": [[10, 4]], \"timestamp\": 2}\r\n");

        let mut output = Vec::new();
        let stats = run(&mut registry(), input.as_slice(), &mut output).unwrap();

        assert_eq!(
            stats,
            ReplayStats {
                frames: 2,
                skipped: 1,
                readings: 4
            }
        );
        let readings = parse_output(&output);
        assert_eq!(readings[0], AlphaReading::new("basic_imbalance", Some(1.0), Some(1.0)));
        assert_eq!(readings[2], AlphaReading::new("basic_imbalance", Some(-3.0), Some(2.0)));
    }

    #[test]
    fn multi_asset_frames_reach_pair_signals() {
        let mut registry = SignalRegistry::new();
        registry.register(Box::new(StatisticalArbSignal::new("BTC", "ETH").unwrap()));

        let input = r#"{"BTC": {"bids": [[99.5, 1]], "asks": [[100.5, 1]], "timestamp": 1}, "ETH": {"bids": [[9.5, 1]], "asks": [[10.5, 1]], "timestamp": 1}}
{"BTC": {"bids": [[101.5, 1]], "asks": [[102.5, 1]], "timestamp": 2}, "ETH": {"bids": [[9.5, 1]], "asks": [[10.5, 1]], "timestamp": 2}}
"#;
        let mut output = Vec::new();
        run(&mut registry, input.as_bytes(), &mut output).unwrap();

        let readings = parse_output(&output);
        assert!(readings[0].value.is_none());
        // spreads [90, 92], mean 91, current 92
        assert_eq!(readings[1].value, Some(-1.0));
    }
}
