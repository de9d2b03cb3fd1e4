use crate::error::{AppError, AppResult};

pub const DEFAULT_COLORS: [&str; 8] = [
    "bg-gray-100",
    "bg-red-200",
    "bg-yellow-300",
    "bg-green-400",
    "bg-blue-500",
    "bg-indigo-600",
    "bg-purple-700",
    "bg-pink-800",
];

/// Fixed, non-empty cycle of CSS color classes
#[derive(Debug, Clone)]
pub struct ColorPalette {
    colors: Vec<String>,
}

impl ColorPalette {
    pub fn new<I, S>(colors: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(AppError::internal("Color palette must not be empty"));
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Color following `current`, wrapping at the end.
    ///
    /// An unknown or missing `current` starts the cycle at the first color.
    pub fn next(&self, current: Option<&str>) -> &str {
        let index = current
            .and_then(|c| self.colors.iter().position(|color| color == c))
            .map_or(0, |i| (i + 1) % self.colors.len());
        &self.colors[index]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        let palette = ColorPalette::default();
        let colors = palette.colors();
        for (i, color) in colors.iter().enumerate() {
            assert_eq!(palette.next(Some(color)), colors[(i + 1) % colors.len()]);
        }
    }

    #[test]
    fn test_unknown_starts_at_first() {
        let palette = ColorPalette::default();
        assert_eq!(palette.next(None), "bg-gray-100");
        assert_eq!(palette.next(Some("")), "bg-gray-100");
        assert_eq!(palette.next(Some("bg-black")), "bg-gray-100");
    }

    #[test]
    fn test_single_color() {
        let palette = ColorPalette::new(["bg-white"]).unwrap();
        assert_eq!(palette.next(Some("bg-white")), "bg-white");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(ColorPalette::new(Vec::<String>::new()).is_err());
    }
}
