//! ActivitySignal: frame-major container for multi-channel EMG activity

use crate::error::{CoactError, CoactResult};
use crate::input_error;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rectangular `frames × channels` matrix of processed EMG amplitudes.
///
/// Rows are uniformly sampled frames in time order, columns are muscles.
/// Column order is the only channel identity. Once built the data is never
/// mutated, so a signal may be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ActivityFrames", into = "ActivityFrames")]
pub struct ActivitySignal {
    /// Trial identifier, used for log correlation only
    id: Uuid,
    /// Frame-interleaved data: [f0c0, f0c1, ..., f1c0, f1c1, ...]
    data: Vec<f64>,
    /// Number of frames (rows)
    frames: usize,
    /// Number of channels (columns)
    channels: usize,
}

/// Serialized form of an [`ActivitySignal`]: one inner vector per frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFrames {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub frames: Vec<Vec<f64>>,
}

impl ActivitySignal {
    /// Build a signal from frames-as-rows data
    pub fn from_rows(rows: Vec<Vec<f64>>) -> CoactResult<Self> {
        let channels = match rows.first() {
            None => return Err(input_error!("activity matrix has no frames")),
            Some(first) => first.len(),
        };
        if channels == 0 {
            return Err(input_error!("activity matrix has no channels"));
        }

        let frames = rows.len();
        let mut data = Vec::with_capacity(frames * channels);
        for (frame_idx, row) in rows.into_iter().enumerate() {
            if row.len() != channels {
                return Err(input_error!(
                    "frame {} has {} channels, expected {}",
                    frame_idx,
                    row.len(),
                    channels
                ));
            }
            data.extend(row);
        }

        Self::from_parts(data, frames, channels)
    }

    /// Build a signal from a frame-interleaved buffer
    pub fn from_interleaved(data: Vec<f64>, channel_count: usize) -> CoactResult<Self> {
        if channel_count == 0 {
            return Err(input_error!("channel count must be at least 1"));
        }
        if data.is_empty() {
            return Err(input_error!("activity buffer is empty"));
        }
        if data.len() % channel_count != 0 {
            return Err(input_error!(
                "buffer length {} is not a multiple of {} channels",
                data.len(),
                channel_count
            ));
        }

        let frames = data.len() / channel_count;
        Self::from_parts(data, frames, channel_count)
    }

    /// Build a signal from channels-as-rows data (one inner vector per muscle).
    ///
    /// The data is transposed to the frame-major layout.
    pub fn from_channels(channels: Vec<Vec<f64>>) -> CoactResult<Self> {
        let frames = match channels.first() {
            None => return Err(input_error!("activity matrix has no channels")),
            Some(first) => first.len(),
        };
        if frames == 0 {
            return Err(input_error!("activity matrix has no frames"));
        }
        if let Some((idx, ch)) = channels.iter().enumerate().find(|(_, c)| c.len() != frames) {
            return Err(input_error!(
                "channel {} has {} frames, expected {}",
                idx,
                ch.len(),
                frames
            ));
        }

        let channel_count = channels.len();
        let mut data = Vec::with_capacity(frames * channel_count);
        for frame_idx in 0..frames {
            for channel in &channels {
                data.push(channel[frame_idx]);
            }
        }

        Self::from_parts(data, frames, channel_count)
    }

    fn from_parts(data: Vec<f64>, frames: usize, channels: usize) -> CoactResult<Self> {
        if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
            return Err(input_error!(
                "non-finite value {} at frame {}, channel {}",
                data[pos],
                pos / channels,
                pos % channels
            ));
        }

        Ok(ActivitySignal {
            id: Uuid::new_v4(),
            data,
            frames,
            channels,
        })
    }

    /// Replace the trial identifier
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Fail unless the signal has exactly the given shape.
    ///
    /// Guards against transposed input, which otherwise yields
    /// plausible-looking results of the wrong length.
    pub fn ensure_shape(&self, frames: usize, channels: usize) -> CoactResult<()> {
        if self.shape() != (frames, channels) {
            return Err(input_error!(
                "expected {}x{} (frames x channels), got {}x{}",
                frames,
                channels,
                self.frames,
                self.channels
            ));
        }
        Ok(())
    }

    /// Fail unless the signal has the given channel count
    pub fn ensure_channels(&self, channels: usize) -> CoactResult<()> {
        if self.channels != channels {
            return Err(CoactError::InvalidInput {
                reason: format!(
                    "expected {} channels, got {} (is the matrix transposed?)",
                    channels, self.channels
                ),
            });
        }
        Ok(())
    }

    /// Trial identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of frames (rows)
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Number of channels (columns)
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// `(frames, channels)`
    pub fn shape(&self) -> (usize, usize) {
        (self.frames, self.channels)
    }

    /// Frame-interleaved backing data
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Channel values of a single frame
    ///
    /// # Panics
    /// Panics if `index >= self.frames()`.
    pub fn frame(&self, index: usize) -> &[f64] {
        let start = index * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Iterate over frames in time order
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.channels)
    }

    /// Get data for a specific channel
    pub fn channel_data(&self, channel_index: usize) -> CoactResult<Vec<f64>> {
        if channel_index >= self.channels {
            return Err(input_error!(
                "channel index {} out of bounds (0-{})",
                channel_index,
                self.channels - 1
            ));
        }

        Ok(self.rows().map(|row| row[channel_index]).collect())
    }

    /// Get all channel data as separate vectors
    pub fn all_channels(&self) -> Vec<Vec<f64>> {
        (0..self.channels)
            .map(|ch| self.rows().map(|row| row[ch]).collect())
            .collect()
    }
}

impl TryFrom<ActivityFrames> for ActivitySignal {
    type Error = CoactError;

    fn try_from(value: ActivityFrames) -> CoactResult<Self> {
        let signal = ActivitySignal::from_rows(value.frames)?;
        Ok(match value.id {
            Some(id) => signal.with_id(id),
            None => signal,
        })
    }
}

impl From<ActivitySignal> for ActivityFrames {
    fn from(signal: ActivitySignal) -> Self {
        let frames = signal.rows().map(<[f64]>::to_vec).collect();
        ActivityFrames {
            id: Some(signal.id),
            frames,
        }
    }
}
