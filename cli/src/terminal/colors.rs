use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const VEHICLE_ID: Color = Color::BrightCyan;
pub const MODEL: Color = Color::BrightWhite;
pub const CUSTOMER: Color = Color::BrightMagenta;
pub const COST: Color = Color::BrightYellow;
pub const RATE: Color = Color::Yellow;
