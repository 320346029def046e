//! Incident segment models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A contiguous frame range classified by the fight detector.
///
/// Field names follow the client vocabulary; the serde renames map them onto
/// the chunk-oriented names the analysis server emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    /// First frame of the segment (inclusive)
    #[serde(rename = "chunk_start_frame")]
    pub start_frame: u64,

    /// Last frame of the segment (inclusive); never below `start_frame`
    #[serde(rename = "chunk_end_frame")]
    pub end_frame: u64,

    /// Start timestamp, formatted MM:SS
    pub start_time: String,

    /// End timestamp, formatted MM:SS
    pub end_time: String,

    /// Detector confidence in 0.0..=1.0
    #[serde(rename = "fight_probability")]
    pub probability: f64,

    /// Whether the detector classified this range as a fight
    #[serde(rename = "fight_detected")]
    pub is_fight: bool,
}

impl Segment {
    /// Number of frames covered by the segment.
    pub fn frame_count(&self) -> u64 {
        self.end_frame.saturating_sub(self.start_frame) + 1
    }

    /// Check whether a playback frame falls inside this segment.
    ///
    /// Used for playback-time highlighting lookups against the timeline.
    pub fn contains_frame(&self, frame: u64) -> bool {
        frame >= self.start_frame && frame <= self.end_frame
    }

    /// Start of the segment in seconds, parsed from the formatted timestamp.
    pub fn start_seconds(&self) -> Option<f64> {
        parse_timestamp(&self.start_time)
    }

    /// End of the segment in seconds, parsed from the formatted timestamp.
    pub fn end_seconds(&self) -> Option<f64> {
        parse_timestamp(&self.end_time)
    }
}

/// Format a frame index as an MM:SS timestamp at the given frame rate.
pub fn format_timestamp(frame: u64, fps: f64) -> String {
    let seconds = if fps > 0.0 { frame as f64 / fps } else { 0.0 };
    format!("{:02}:{:02}", (seconds / 60.0) as u64, (seconds % 60.0) as u64)
}

/// Parse an MM:SS (or HH:MM:SS) timestamp to total seconds.
fn parse_timestamp(ts: &str) -> Option<f64> {
    let parts: Vec<&str> = ts.split(':').collect();
    match parts.len() {
        1 => parts[0].parse().ok(),
        2 => {
            let minutes: f64 = parts[0].parse().ok()?;
            let seconds: f64 = parts[1].parse().ok()?;
            Some(minutes * 60.0 + seconds)
        }
        3 => {
            let hours: f64 = parts[0].parse().ok()?;
            let minutes: f64 = parts[1].parse().ok()?;
            let seconds: f64 = parts[2].parse().ok()?;
            Some(hours * 3600.0 + minutes * 60.0 + seconds)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Segment {
        Segment {
            start_frame: 40,
            end_frame: 79,
            start_time: "00:01".to_string(),
            end_time: "00:02".to_string(),
            probability: 0.92,
            is_fight: true,
        }
    }

    #[test]
    fn test_segment_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["chunk_start_frame"], 40);
        assert_eq!(json["chunk_end_frame"], 79);
        assert_eq!(json["fight_probability"], 0.92);
        assert_eq!(json["fight_detected"], true);

        let back: Segment = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_contains_frame() {
        let seg = sample();
        assert!(seg.contains_frame(40));
        assert!(seg.contains_frame(79));
        assert!(!seg.contains_frame(39));
        assert!(!seg.contains_frame(80));
    }

    #[test]
    fn test_frame_count() {
        assert_eq!(sample().frame_count(), 40);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0, 30.0), "00:00");
        assert_eq!(format_timestamp(1800, 30.0), "01:00");
        assert_eq!(format_timestamp(1845, 30.0), "01:01");
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("00:01"), Some(1.0));
        assert_eq!(parse_timestamp("01:30"), Some(90.0));
        assert_eq!(parse_timestamp("01:00:00"), Some(3600.0));
        assert_eq!(parse_timestamp("bogus"), None);
    }

    #[test]
    fn test_segment_seconds() {
        let seg = sample();
        assert_eq!(seg.start_seconds(), Some(1.0));
        assert_eq!(seg.end_seconds(), Some(2.0));
    }
}
