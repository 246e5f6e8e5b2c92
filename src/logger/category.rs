use std::fmt;
use std::str::FromStr;

/// Subsystem shared by every channel of the facility.
pub const SUBSYSTEM: &str = "audio.streaming.log";

pub const AUDIO_RENDERING_CHANNEL: &str = "audio.rendering";
pub const NETWORKING_CHANNEL: &str = "audio.networking";
pub const GENERIC_CHANNEL: &str = "audio.streaming.generic";

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Category {
    AudioRendering,
    Networking,
    Generic,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::AudioRendering,
        Category::Networking,
        Category::Generic,
    ];

    pub fn channel_name(self) -> &'static str {
        match self {
            Category::AudioRendering => AUDIO_RENDERING_CHANNEL,
            Category::Networking => NETWORKING_CHANNEL,
            Category::Generic => GENERIC_CHANNEL,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::AudioRendering => 0,
            Category::Networking => 1,
            Category::Generic => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.channel_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio_rendering" | "audioRendering" | AUDIO_RENDERING_CHANNEL => {
                Ok(Category::AudioRendering)
            }
            "networking" | NETWORKING_CHANNEL => Ok(Category::Networking),
            "generic" | GENERIC_CHANNEL => Ok(Category::Generic),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// Destination bound to one category. Only the logger creates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogChannel {
    subsystem: &'static str,
    category: Category,
}

impl LogChannel {
    pub(crate) fn new(category: Category) -> Self {
        Self {
            subsystem: SUBSYSTEM,
            category,
        }
    }

    pub fn subsystem(&self) -> &'static str {
        self.subsystem
    }

    pub fn name(&self) -> &'static str {
        self.category.channel_name()
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names_are_distinct() {
        let mut names: Vec<_> = Category::ALL.iter().map(|c| c.channel_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn index_matches_all_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn parses_short_and_channel_names() {
        assert_eq!("networking".parse(), Ok(Category::Networking));
        assert_eq!("audio.networking".parse(), Ok(Category::Networking));
        assert_eq!("audioRendering".parse(), Ok(Category::AudioRendering));
        assert_eq!("audio_rendering".parse(), Ok(Category::AudioRendering));
        assert_eq!("audio.streaming.generic".parse(), Ok(Category::Generic));
        assert_eq!(
            "video".parse::<Category>(),
            Err(ParseCategoryError("video".to_string()))
        );
    }

    #[test]
    fn display_is_channel_name() {
        assert_eq!(Category::Generic.to_string(), "audio.streaming.generic");
    }

    #[test]
    fn channel_carries_subsystem() {
        let channel = LogChannel::new(Category::AudioRendering);
        assert_eq!(channel.subsystem(), "audio.streaming.log");
        assert_eq!(channel.name(), "audio.rendering");
        assert_eq!(channel.category(), Category::AudioRendering);
    }
}
