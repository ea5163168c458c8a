use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const FILE_PATH: Color = Color::BrightBlue;
pub const TOKEN_COUNT: Color = Color::BrightYellow;
