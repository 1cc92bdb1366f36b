mod error_conversions;
