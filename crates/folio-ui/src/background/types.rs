use serde::{Deserialize, Serialize};

/// Decorative background routine selected for a page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    /// Three superimposed sine waves
    Sine,
    /// Lissajous point with a fading trail
    Oscillator,
    /// Drifting points linked by proximity lines
    Constellation,
    /// Rising out-of-focus bubbles
    Bokeh,
    /// No decorative background: no canvas, no frame loop
    #[default]
    None,
}

/// Body class markers per routine, in precedence order
const MARKERS: &[(BackgroundType, &[&str])] = &[
    (BackgroundType::Sine, &["bg-home", "bg-acustica"]),
    (BackgroundType::Oscillator, &["bg-elec"]),
    (BackgroundType::Constellation, &["bg-dev", "bg-cv"]),
    (BackgroundType::Bokeh, &["bg-tesis"]),
];

impl BackgroundType {
    /// Every animated routine (excludes `None`)
    pub fn all() -> &'static [BackgroundType] {
        &[
            BackgroundType::Sine,
            BackgroundType::Oscillator,
            BackgroundType::Constellation,
            BackgroundType::Bokeh,
        ]
    }

    /// Resolve the routine from the page's body classes
    ///
    /// Markers are checked in a fixed precedence order, so a body carrying
    /// markers for two routines always resolves to the same one.
    pub fn from_markers<'a, I>(classes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let classes: Vec<&str> = classes.into_iter().collect();
        MARKERS
            .iter()
            .find(|(_, markers)| markers.iter().any(|m| classes.contains(m)))
            .map(|(kind, _)| *kind)
            .unwrap_or(BackgroundType::None)
    }

    /// Body classes that select this routine
    pub fn markers(&self) -> &'static [&'static str] {
        MARKERS
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, markers)| *markers)
            .unwrap_or(&[])
    }

    pub fn is_animated(&self) -> bool {
        *self != BackgroundType::None
    }

    pub fn name(&self) -> &'static str {
        match self {
            BackgroundType::Sine => "Sine Waves",
            BackgroundType::Oscillator => "Oscilloscope",
            BackgroundType::Constellation => "Constellation",
            BackgroundType::Bokeh => "Bokeh",
            BackgroundType::None => "None",
        }
    }

    /// Parse from string ID (e.g., "sine", "bokeh")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "sine" => Some(BackgroundType::Sine),
            "oscillator" => Some(BackgroundType::Oscillator),
            "constellation" => Some(BackgroundType::Constellation),
            "bokeh" => Some(BackgroundType::Bokeh),
            "none" => Some(BackgroundType::None),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            BackgroundType::Sine => "sine",
            BackgroundType::Oscillator => "oscillator",
            BackgroundType::Constellation => "constellation",
            BackgroundType::Bokeh => "bokeh",
            BackgroundType::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_markers() {
        assert_eq!(BackgroundType::from_markers(["bg-home"]), BackgroundType::Sine);
        assert_eq!(BackgroundType::from_markers(["bg-acustica"]), BackgroundType::Sine);
        assert_eq!(BackgroundType::from_markers(["bg-elec"]), BackgroundType::Oscillator);
        assert_eq!(BackgroundType::from_markers(["bg-dev"]), BackgroundType::Constellation);
        assert_eq!(BackgroundType::from_markers(["bg-cv"]), BackgroundType::Constellation);
        assert_eq!(BackgroundType::from_markers(["bg-tesis"]), BackgroundType::Bokeh);
    }

    #[test]
    fn test_from_markers_no_match() {
        assert_eq!(BackgroundType::from_markers(["page", "dark"]), BackgroundType::None);
        assert_eq!(BackgroundType::from_markers(std::iter::empty()), BackgroundType::None);
        // Marker matching is exact, not by prefix
        assert_eq!(BackgroundType::from_markers(["bg-homepage"]), BackgroundType::None);
    }

    #[test]
    fn test_from_markers_precedence() {
        assert_eq!(
            BackgroundType::from_markers(["bg-tesis", "bg-elec"]),
            BackgroundType::Oscillator
        );
        assert_eq!(
            BackgroundType::from_markers(["bg-cv", "bg-home"]),
            BackgroundType::Sine
        );
    }

    #[test]
    fn test_markers_roundtrip() {
        for bg in BackgroundType::all() {
            for marker in bg.markers() {
                assert_eq!(BackgroundType::from_markers([*marker]), *bg);
            }
        }
        assert!(BackgroundType::None.markers().is_empty());
    }

    #[test]
    fn test_id_roundtrip() {
        for bg in BackgroundType::all() {
            assert_eq!(BackgroundType::from_id(bg.id()), Some(*bg));
        }
        assert_eq!(BackgroundType::from_id("NONE"), Some(BackgroundType::None));
        assert_eq!(BackgroundType::from_id("plasma"), None);
    }

    #[test]
    fn test_all_excludes_none() {
        assert_eq!(BackgroundType::all().len(), 4);
        assert!(BackgroundType::all().iter().all(BackgroundType::is_animated));
        assert!(!BackgroundType::None.is_animated());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&BackgroundType::Constellation).unwrap(), "\"constellation\"");
        let parsed: BackgroundType = serde_json::from_str("\"oscillator\"").unwrap();
        assert_eq!(parsed, BackgroundType::Oscillator);
    }
}
