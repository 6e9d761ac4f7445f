use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// The semantic scope of a Figma variable.
///
/// The set is closed: every scope tag received from the API is either one of
/// these members or is discarded during normalization. The wire form is the
/// `SCREAMING_SNAKE_CASE` identifier used by the Figma REST API.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableScope {
	AllScopes,
	TextContent,
	CornerRadius,
	WidthHeight,
	Gap,
	/// The fallback for absent or unrecognized scope tags.
	#[default]
	AllFills,
	FrameFill,
	ShapeFill,
	TextFill,
	StrokeColor,
	EffectColor,
	StrokeFloat,
	EffectFloat,
	Opacity,
	FontFamily,
	FontStyle,
	FontWeight,
	FontSize,
	LineHeight,
	LetterSpacing,
	ParagraphSpacing,
	ParagraphIndent,
}

/// The category family a scope falls back to when a variable name carries no
/// folder path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeFamily {
	Color,
	Typography,
	Layout,
	Other,
}

impl ScopeFamily {
	/// The category label used in the stylesheet comment headers.
	pub fn label(self) -> &'static str {
		match self {
			Self::Color => "Colors",
			Self::Typography => "Typography",
			Self::Layout => "Layout",
			Self::Other => "Other",
		}
	}
}

/// How a value in a given scope is rendered as a CSS literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueUnit {
	/// Numeric values receive a `px` suffix.
	Pixels,
	/// Numeric values are emitted as plain numbers.
	Unitless,
	/// The value's string form is emitted unchanged.
	Raw,
}

impl VariableScope {
	/// Every scope, in declaration order.
	pub const ALL: [VariableScope; 22] = [
		Self::AllScopes,
		Self::TextContent,
		Self::CornerRadius,
		Self::WidthHeight,
		Self::Gap,
		Self::AllFills,
		Self::FrameFill,
		Self::ShapeFill,
		Self::TextFill,
		Self::StrokeColor,
		Self::EffectColor,
		Self::StrokeFloat,
		Self::EffectFloat,
		Self::Opacity,
		Self::FontFamily,
		Self::FontStyle,
		Self::FontWeight,
		Self::FontSize,
		Self::LineHeight,
		Self::LetterSpacing,
		Self::ParagraphSpacing,
		Self::ParagraphIndent,
	];

	/// Match a raw scope tag against the closed set. Matching is exact and
	/// case-sensitive.
	pub fn parse(tag: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|scope| scope.as_str() == tag)
	}

	/// The identifier used by the Figma API.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::AllScopes => "ALL_SCOPES",
			Self::TextContent => "TEXT_CONTENT",
			Self::CornerRadius => "CORNER_RADIUS",
			Self::WidthHeight => "WIDTH_HEIGHT",
			Self::Gap => "GAP",
			Self::AllFills => "ALL_FILLS",
			Self::FrameFill => "FRAME_FILL",
			Self::ShapeFill => "SHAPE_FILL",
			Self::TextFill => "TEXT_FILL",
			Self::StrokeColor => "STROKE_COLOR",
			Self::EffectColor => "EFFECT_COLOR",
			Self::StrokeFloat => "STROKE_FLOAT",
			Self::EffectFloat => "EFFECT_FLOAT",
			Self::Opacity => "OPACITY",
			Self::FontFamily => "FONT_FAMILY",
			Self::FontStyle => "FONT_STYLE",
			Self::FontWeight => "FONT_WEIGHT",
			Self::FontSize => "FONT_SIZE",
			Self::LineHeight => "LINE_HEIGHT",
			Self::LetterSpacing => "LETTER_SPACING",
			Self::ParagraphSpacing => "PARAGRAPH_SPACING",
			Self::ParagraphIndent => "PARAGRAPH_INDENT",
		}
	}

	/// The CSS custom property fragment for this scope.
	///
	/// `ALL_SCOPES` maps to the empty string, which yields identifiers of the
	/// form `---name`. Existing stylesheets depend on that shape.
	pub fn prefix(self) -> &'static str {
		match self {
			Self::AllScopes => "",
			Self::TextContent => "text",
			Self::CornerRadius => "border-radius",
			Self::WidthHeight => "size",
			Self::Gap => "gap",
			Self::AllFills
			| Self::FrameFill
			| Self::ShapeFill
			| Self::TextFill
			| Self::StrokeColor
			| Self::EffectColor => "color",
			Self::FontFamily => "font-family",
			Self::FontStyle => "font-style",
			Self::FontWeight => "font-weight",
			Self::FontSize => "font-size",
			Self::LineHeight => "line-height",
			Self::LetterSpacing => "letter-spacing",
			Self::StrokeFloat => "border",
			Self::EffectFloat => "effect",
			Self::Opacity => "opacity",
			Self::ParagraphSpacing => "paragraph",
			Self::ParagraphIndent => "indent",
		}
	}

	pub fn family(self) -> ScopeFamily {
		match self {
			Self::AllFills
			| Self::FrameFill
			| Self::ShapeFill
			| Self::TextFill
			| Self::StrokeColor
			| Self::EffectColor => ScopeFamily::Color,
			Self::FontSize
			| Self::FontFamily
			| Self::FontWeight
			| Self::LineHeight
			| Self::LetterSpacing
			| Self::ParagraphSpacing
			| Self::ParagraphIndent => ScopeFamily::Typography,
			Self::CornerRadius | Self::WidthHeight | Self::Gap => ScopeFamily::Layout,
			Self::AllScopes
			| Self::TextContent
			| Self::StrokeFloat
			| Self::EffectFloat
			| Self::Opacity
			| Self::FontStyle => ScopeFamily::Other,
		}
	}

	pub fn unit(self) -> ValueUnit {
		match self {
			Self::FontSize
			| Self::LineHeight
			| Self::LetterSpacing
			| Self::ParagraphSpacing
			| Self::ParagraphIndent
			| Self::CornerRadius
			| Self::Gap => ValueUnit::Pixels,
			Self::Opacity => ValueUnit::Unitless,
			Self::AllScopes
			| Self::TextContent
			| Self::WidthHeight
			| Self::AllFills
			| Self::FrameFill
			| Self::ShapeFill
			| Self::TextFill
			| Self::StrokeColor
			| Self::EffectColor
			| Self::StrokeFloat
			| Self::EffectFloat
			| Self::FontFamily
			| Self::FontStyle
			| Self::FontWeight => ValueUnit::Raw,
		}
	}
}

impl fmt::Display for VariableScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when a string is not a member of [`VariableScope`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variable scope: `{0}`")]
pub struct UnknownScope(pub String);

impl FromStr for VariableScope {
	type Err = UnknownScope;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s).ok_or_else(|| UnknownScope(s.to_string()))
	}
}
