//! Ambient language and text direction for a render call.
//!
//! The embedding page supplies a BCP 47 language tag and a localized "no data"
//! message; everything else is derived here. Direction is keyed off the
//! primary language subtag. Tags whose directionality cannot be determined
//! fall back to left-to-right, matching the behavior of older client
//! runtimes that lacked locale introspection.

/// Base direction of the surrounding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Direction conventionally used by the given language tag.
    pub fn for_language(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or(tag);
        match lang.to_ascii_lowercase().as_str() {
            "ar" | "he" | "fa" | "ur" | "yi" | "ps" | "sd" | "ug" | "ku" | "ckb" | "dv" | "arc"
            | "syr" => Self::Rtl,
            _ => Self::Ltr,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

pub const DEFAULT_NO_DATA_TEXT: &str = "No data";

/// Language tag plus everything the formatters derive from it.
///
/// The `no_data_text` placeholder comes from the host's message system and is
/// used verbatim wherever a data point is the absence sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleContext {
    language: String,
    direction: TextDirection,
    no_data_text: String,
}

impl LocaleContext {
    pub fn new(language: impl Into<String>) -> Self {
        let language = language.into();
        let direction = TextDirection::for_language(&language);
        Self {
            language,
            direction,
            no_data_text: DEFAULT_NO_DATA_TEXT.to_string(),
        }
    }

    /// Replaces the English placeholder with a host-localized message.
    pub fn with_no_data_text(mut self, text: impl Into<String>) -> Self {
        self.no_data_text = text.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }

    pub fn no_data_text(&self) -> &str {
        &self.no_data_text
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new("en")
    }
}
