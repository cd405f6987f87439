/*!
 * Dialog structure of multi-line text.
 *
 * - `segmenter`: splits text into per-line speaker/content records
 * - `speakers`: stable speaker-to-color assignment for one document
 */

pub mod segmenter;
pub mod speakers;

pub use self::segmenter::{rejoin, segment_dialog, DialogRecord};
pub use self::speakers::SpeakerColorMap;
