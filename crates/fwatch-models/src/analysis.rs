//! Completed-job analysis results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Full result document produced by the analysis server for a completed job.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResults {
    /// Server-side path of the annotated output video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_video_path: Option<String>,

    /// Total frames analyzed
    pub total_frames: u64,

    /// Frames per detection chunk
    pub sequence_length: u32,

    /// Probability threshold used for classification
    pub threshold: f64,

    /// Frame rate of the annotated output video
    pub output_frame_rate: u32,

    /// Elapsed processing time in seconds
    pub processing_time_seconds: f64,

    /// Total number of segments analyzed
    pub total_segments: u32,

    /// Number of segments classified as fights
    pub fight_segments: u32,

    /// Per-segment predictions, in playback order
    pub predictions: Vec<Segment>,

    /// Server-side error, if the analysis aborted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResults {
    /// Segments the detector classified as fights.
    pub fn incidents(&self) -> impl Iterator<Item = &Segment> {
        self.predictions.iter().filter(|s| s.is_fight)
    }

    /// Number of detected incidents.
    pub fn incident_count(&self) -> usize {
        self.incidents().count()
    }

    /// Find the segment a playback frame falls into.
    pub fn segment_at_frame(&self, frame: u64) -> Option<&Segment> {
        self.predictions.iter().find(|s| s.contains_frame(frame))
    }
}
