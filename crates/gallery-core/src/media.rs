//! Media items and the preload contract for the focused item's full asset.
//!
//! The core never loads anything itself. It tells a preloading collaborator
//! which item became selected and reads back the outcome.

use crate::constants::{HIGH_QUALITY_WIDTH_MARKER, PREVIEW_WIDTH_MARKER};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub kind: MediaKind,
    /// Preview-resolution thumbnail.
    pub image_url: String,
    pub video_url: Option<String>,
}

impl MediaItem {
    pub fn image(id: &str, title: &str, image_url: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            kind: MediaKind::Image,
            image_url: image_url.to_owned(),
            video_url: None,
        }
    }

    pub fn video(id: &str, title: &str, image_url: &str, video_url: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            kind: MediaKind::Video,
            image_url: image_url.to_owned(),
            video_url: Some(video_url.to_owned()),
        }
    }

    #[inline]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// URL of the full-quality asset shown once an item is focused.
///
/// Images swap the preview width marker for the high-quality one; videos use
/// their video URL and fall back to the thumbnail.
pub fn high_quality_url(item: &MediaItem) -> String {
    match item.kind {
        MediaKind::Image => item
            .image_url
            .replace(PREVIEW_WIDTH_MARKER, HIGH_QUALITY_WIDTH_MARKER),
        MediaKind::Video => item
            .video_url
            .clone()
            .unwrap_or_else(|| item.image_url.clone()),
    }
}

const UNSPLASH: &str = "https://images.unsplash.com/photo-";

/// The fifteen-item reference catalog.
pub fn reference_catalog() -> Vec<MediaItem> {
    let img = |id: &str, title: &str, photo: &str| {
        MediaItem::image(id, title, &format!("{UNSPLASH}{photo}?w=600"))
    };
    vec![
        img("1", "Mountain Vista", "1506905925346-21bda4d32df4"),
        img("2", "Forest Path", "1469474968028-56623f02e42e"),
        img("3", "Lakeside Sunset", "1501785888041-af3ef285b470"),
        img("4", "Ocean Waves", "1511884642898-4c92249e20b6"),
        img("5", "Misty Mountains", "1470071459604-3b5ec3a7fe05"),
        img("6", "Desert Dunes", "1441974231531-c6227db76b6e"),
        img("7", "Coastal Cliffs", "1475924156734-496f6cac6ec1"),
        img("8", "Aurora Sky", "1426604966848-d7adac402bff"),
        img("9", "Tropical Paradise", "1472214103451-9374bd1c798e"),
        img("10", "Canyon View", "1506905925346-21bda4d32df4"),
        MediaItem::video(
            "11",
            "Waterfall Motion",
            &format!("{UNSPLASH}1418065460487-3e41a6c84dc5?w=600"),
            "https://videos.pexels.com/video-files/3571264/3571264-uhd_2560_1440_30fps.mp4",
        ),
        img("12", "Snowy Peaks", "1464822759023-fed622ff2c3b"),
        img("13", "Prairie Sunset", "1439066615861-d1af74d74000"),
        MediaItem::video(
            "14",
            "Ocean Sunset",
            &format!("{UNSPLASH}1483728642387-6c3bdd6c93e5?w=600"),
            "https://videos.pexels.com/video-files/2169880/2169880-uhd_2560_1440_30fps.mp4",
        ),
        img("15", "Countryside", "1447752875215-b2761acb3c5d"),
    ]
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PreloadError {
    #[error("failed to load {kind} {url}")]
    LoadFailed { kind: &'static str, url: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum PreloadState {
    #[default]
    Idle,
    Pending {
        id: String,
        url: String,
    },
    Loaded {
        id: String,
        url: String,
    },
    Failed {
        id: String,
        error: PreloadError,
    },
}

/// Tracks the single outstanding preload for the selected item.
#[derive(Clone, Debug, Default)]
pub struct PreloadTracker {
    state: PreloadState,
}

impl PreloadTracker {
    pub fn state(&self) -> &PreloadState {
        &self.state
    }

    /// The item the collaborator should be loading, if any.
    pub fn pending_request(&self) -> Option<(&str, &str)> {
        match &self.state {
            PreloadState::Pending { id, url } => Some((id.as_str(), url.as_str())),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PreloadState::Pending { .. })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, PreloadState::Loaded { .. })
    }

    pub fn high_quality_url(&self) -> Option<&str> {
        match &self.state {
            PreloadState::Loaded { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PreloadError> {
        match &self.state {
            PreloadState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Selection changed to `item`; request its high-quality asset.
    pub fn begin(&mut self, item: &MediaItem) {
        let url = high_quality_url(item);
        log::debug!("[preload] {} -> {}", item.id, url);
        self.state = PreloadState::Pending {
            id: item.id.clone(),
            url,
        };
    }

    /// Selection cleared.
    pub fn clear(&mut self) {
        self.state = PreloadState::Idle;
    }

    /// Record the collaborator's outcome. Results for anything other than
    /// the pending request are stale and dropped; returns whether applied.
    pub fn resolve(&mut self, id: &str, outcome: Result<(), PreloadError>) -> bool {
        let PreloadState::Pending { id: pending, url } = &self.state else {
            log::debug!("[preload] no pending request; dropping result for {}", id);
            return false;
        };
        if pending != id {
            log::debug!("[preload] stale result for {} (pending {})", id, pending);
            return false;
        }
        let (id, url) = (pending.clone(), url.clone());
        self.state = match outcome {
            Ok(()) => PreloadState::Loaded { id, url },
            Err(error) => {
                log::warn!("[preload] {}", error);
                PreloadState::Failed { id, error }
            }
        };
        true
    }
}
