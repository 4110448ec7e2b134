// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::IdentityKey;

/// Label shown for an event without a name.
pub const UNKNOWN_EVENT: &str = "Unknown Event";
/// Era shown for an event without one.
pub const UNKNOWN_ERA: &str = "Unknown Era";
/// Description shown for an event without one.
pub const UNKNOWN_DESCRIPTION: &str = "No description available";

/// A reference to an embeddable media clip attached to an event.
///
/// The URL is kept verbatim; turning it into an embed is a renderer concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRef {
    /// Source URL of the clip.
    pub url: String,
    /// Offset into the clip where playback starts, in seconds.
    pub start_time: Option<u32>,
    /// Offset into the clip where playback stops, in seconds.
    pub end_time: Option<u32>,
}

/// A single dated event on the timeline.
///
/// Events are immutable once loaded. Text fields are optional so that partially
/// populated records load without error; the accessors substitute the
/// `UNKNOWN_*` fallbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "serde_impl::EventRecord"))]
pub struct Event {
    id: Option<String>,
    year: i32,
    name: Option<String>,
    era: Option<String>,
    description: Option<String>,
    impact: Option<String>,
    media: Option<MediaRef>,
}

impl Event {
    /// Creates an event with only a year and a name.
    #[must_use]
    pub fn new(year: i32, name: impl Into<String>) -> Self {
        Self {
            id: None,
            year,
            name: Some(name.into()),
            era: None,
            description: None,
            impact: None,
            media: None,
        }
    }

    /// Sets the explicit id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the era.
    #[must_use]
    pub fn with_era(mut self, era: impl Into<String>) -> Self {
        self.era = Some(era.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the impact note.
    #[must_use]
    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = Some(impact.into());
        self
    }

    /// Attaches a media reference.
    #[must_use]
    pub fn with_media(mut self, media: MediaRef) -> Self {
        self.media = Some(media);
        self
    }

    /// Returns the explicit id, if the record carried one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the event year. Negative years are BCE.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the event name, or [`UNKNOWN_EVENT`].
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_EVENT)
    }

    /// Returns the era, or [`UNKNOWN_ERA`].
    #[must_use]
    pub fn era(&self) -> &str {
        self.era.as_deref().unwrap_or(UNKNOWN_ERA)
    }

    /// Returns the description, or [`UNKNOWN_DESCRIPTION`].
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(UNKNOWN_DESCRIPTION)
    }

    /// Returns the impact note. There is no fallback; absent means "not shown".
    #[must_use]
    pub fn impact(&self) -> Option<&str> {
        self.impact.as_deref()
    }

    /// Returns the media reference, if any.
    #[must_use]
    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }

    /// Returns the identity key for this event.
    ///
    /// See [`IdentityKey::for_event`].
    #[must_use]
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::for_event(self.id(), self.year, self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use alloc::string::String;

    use serde::Deserialize;

    use super::{Event, MediaRef};

    /// Ids show up both as strings and as bare numbers in datasets.
    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(super) enum RawId {
        Number(i64),
        Text(String),
    }

    /// Clip offsets show up both as numbers and as numeric strings.
    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(super) enum RawSeconds {
        Number(u32),
        Text(String),
    }

    impl RawSeconds {
        fn seconds(self) -> Option<u32> {
            match self {
                Self::Number(n) => Some(n),
                Self::Text(text) => text.trim().parse().ok(),
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct EventRecord {
        #[serde(default)]
        id: Option<RawId>,
        year: i32,
        #[serde(default)]
        event: Option<String>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        era: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        explanation: Option<String>,
        #[serde(default)]
        impact: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        start_time: Option<RawSeconds>,
        #[serde(default)]
        end_time: Option<RawSeconds>,
    }

    impl From<EventRecord> for Event {
        fn from(raw: EventRecord) -> Self {
            let id = raw.id.map(|id| match id {
                RawId::Number(n) => alloc::format!("{n}"),
                RawId::Text(text) => text,
            });
            let media = raw.url.filter(|url| !url.is_empty()).map(|url| MediaRef {
                url,
                start_time: raw.start_time.and_then(RawSeconds::seconds),
                end_time: raw.end_time.and_then(RawSeconds::seconds),
            });
            Self {
                id,
                year: raw.year,
                name: raw.event.or(raw.name),
                era: raw.era,
                description: raw.description.or(raw.explanation),
                impact: raw.impact,
                media,
            }
        }
    }
}
