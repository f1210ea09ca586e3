use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 120 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 170, b: 60 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 210, g: 210, b: 210 };

pub const LARGEST: Color = Color::TrueColor { r: 110, g: 170, b: 255 };
pub const SMALLEST: Color = Color::TrueColor { r: 190, g: 140, b: 255 };
pub const DIFFERENCE: Color = Color::TrueColor { r: 255, g: 220, b: 120 };
pub const CONSTANT: Color = Color::BrightGreen;
pub const BAR: Color = Color::TrueColor { r: 31, g: 119, b: 180 };
