//! Visual theming for the app and its particle background.
//!
//! Provides the RGBA color type, the selectable accent colors, and the
//! palette particles draw their colors from.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque white.
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parses `#RRGGBB` (leading `#` optional, surrounding whitespace ignored).
	/// Channels that fail to parse fall back to mid-grey, like the canvas color parser.
	pub fn from_hex(hex: &str) -> Self {
		let hex = hex.trim();
		let hex = hex.strip_prefix('#').unwrap_or(hex);
		let channel = |range: std::ops::Range<usize>| {
			hex.get(range)
				.and_then(|s| u8::from_str_radix(s, 16).ok())
				.unwrap_or(128)
		};
		Color::rgb(channel(0..2), channel(2..4), channel(4..6))
	}

	/// `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// User-selectable accent color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccentColor {
	/// `#3B8D85`, the default.
	#[default]
	Teal,
	/// `#8E7CC3`.
	Purple,
	/// `#5B9BD5`.
	Blue,
	/// `#E36C09`.
	Orange,
	/// `#70AD47`.
	Green,
	/// `#C00000`.
	Red,
}

impl AccentColor {
	/// All options in picker order.
	pub const ALL: [AccentColor; 6] = [
		AccentColor::Teal,
		AccentColor::Purple,
		AccentColor::Blue,
		AccentColor::Orange,
		AccentColor::Green,
		AccentColor::Red,
	];

	/// Display name for the picker.
	pub fn name(self) -> &'static str {
		match self {
			AccentColor::Teal => "Teal",
			AccentColor::Purple => "Purple",
			AccentColor::Blue => "Blue",
			AccentColor::Orange => "Orange",
			AccentColor::Green => "Green",
			AccentColor::Red => "Red",
		}
	}

	/// Canonical hex form, also the persisted representation.
	pub fn hex(self) -> &'static str {
		match self {
			AccentColor::Teal => "#3B8D85",
			AccentColor::Purple => "#8E7CC3",
			AccentColor::Blue => "#5B9BD5",
			AccentColor::Orange => "#E36C09",
			AccentColor::Green => "#70AD47",
			AccentColor::Red => "#C00000",
		}
	}

	/// Parsed from [`hex`](Self::hex).
	pub fn color(self) -> Color {
		Color::from_hex(self.hex())
	}

	/// Looks up the option with this hex value, falling back to teal.
	pub fn from_hex(hex: &str) -> Self {
		let hex = hex.trim();
		Self::ALL
			.into_iter()
			.find(|option| option.hex().eq_ignore_ascii_case(hex))
			.unwrap_or_default()
	}
}

/// Fixed app chrome colors.
pub struct AppColors;

impl AppColors {
	/// Gradient start behind every screen.
	pub const BACKGROUND: Color = Color::rgb(0x1a, 0x1a, 0x1d);
	/// Gradient end.
	pub const BACKGROUND_SECONDARY: Color = Color::rgb(0x18, 0x19, 0x1b);
	/// Card and panel fill.
	pub const CARD: Color = Color::rgb(0x1e, 0x22, 0x21);
}

/// Colors particles are drawn from: the accent plus three soft constants.
pub fn particle_palette(accent: AccentColor) -> Vec<Color> {
	vec![
		accent.color(),
		Color::WHITE,
		Color::rgb(160, 180, 200), // Light steel
		Color::rgb(180, 160, 210), // Soft lavender
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_with_and_without_hash() {
		assert_eq!(Color::from_hex("#3B8D85"), Color::rgb(0x3b, 0x8d, 0x85));
		assert_eq!(Color::from_hex("  c00000 "), Color::rgb(0xc0, 0, 0));
	}

	#[test]
	fn malformed_hex_channels_fall_back_to_grey() {
		assert_eq!(Color::from_hex("#zz0011"), Color::rgb(128, 0, 0x11));
		assert_eq!(Color::from_hex("#12"), Color::rgb(0x12, 128, 128));
	}

	#[test]
	fn css_formatting_depends_on_alpha() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(
			Color::rgb(255, 0, 16).with_alpha(0.5).to_css(),
			"rgba(255, 0, 16, 0.5)"
		);
	}

	#[test]
	fn accent_lookup_is_case_insensitive_and_defaults_to_teal() {
		assert_eq!(AccentColor::from_hex("#8e7cc3"), AccentColor::Purple);
		assert_eq!(AccentColor::from_hex("#000000"), AccentColor::Teal);
		assert_eq!(AccentColor::from_hex(""), AccentColor::Teal);
	}

	#[test]
	fn palette_leads_with_current_accent() {
		let palette = particle_palette(AccentColor::Orange);
		assert_eq!(palette.len(), 4);
		assert_eq!(palette[0], AccentColor::Orange.color());
	}
}
