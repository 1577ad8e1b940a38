/// The literal kind of an original version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Integer,
    Float,
    TextAscii,
    TextBytes,
    TextUnicode,
}

impl SourceKind {
    pub fn is_text(self) -> bool {
        match self {
            SourceKind::TextAscii | SourceKind::TextBytes | SourceKind::TextUnicode => true,
            SourceKind::Integer | SourceKind::Float => false,
        }
    }
}

/// How an original version value was written.
///
/// Produced once by the parser and never modified afterwards. A fixed-point
/// style carries no fractional notation, so it never has a decimal place
/// count of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    source_kind: SourceKind,
    is_fixed_point: bool,
    decimal_places: Option<u32>,
}

/// Style used for a single formatting call, after demotion and overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveStyle {
    pub is_fixed_point: bool,
    pub decimal_places: Option<u32>,
}

impl StyleDescriptor {
    /// Style of a value written without fractional notation
    pub fn fixed_point(source_kind: SourceKind) -> Self {
        StyleDescriptor {
            source_kind,
            is_fixed_point: true,
            decimal_places: None,
        }
    }

    /// Style of a value written with fractional notation.
    ///
    /// `decimal_places` counts the separator itself plus every character after it.
    pub fn fractional(source_kind: SourceKind, decimal_places: u32) -> Self {
        StyleDescriptor {
            source_kind,
            is_fixed_point: false,
            decimal_places: Some(decimal_places),
        }
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    pub fn is_text(&self) -> bool {
        self.source_kind.is_text()
    }

    pub fn is_fixed_point(&self) -> bool {
        self.is_fixed_point
    }

    pub fn decimal_places(&self) -> Option<u32> {
        self.decimal_places
    }

    /// Resolve the style to use for rendering `value`.
    ///
    /// An explicit `places_override` replaces the inferred place count. A
    /// fixed-point style is demoted to floating when `value` has a fractional
    /// part, with the place count defaulting to zero if none is known.
    pub fn effective(&self, value: f64, places_override: Option<u32>) -> EffectiveStyle {
        let mut decimal_places = places_override.or(self.decimal_places);
        let mut is_fixed_point = self.is_fixed_point;

        if is_fixed_point && !is_integral(value) {
            is_fixed_point = false;
            decimal_places = decimal_places.or(Some(0));
        }

        EffectiveStyle {
            is_fixed_point,
            decimal_places,
        }
    }
}

/// True when `value` has no fractional part (never true for NaN or infinities)
pub(crate) fn is_integral(value: f64) -> bool {
    value.fract() == 0.0
}
