use std::fmt;

/// Token colour. A cell with no token is `None` in an `Option<Colour>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Black,
    White,
}

impl Colour {
    /// Get the other colour
    pub fn opposite(self) -> Colour {
        match self {
            Colour::Black => Colour::White,
            Colour::White => Colour::Black,
        }
    }

    /// Get colour name for display
    pub fn name(self) -> &'static str {
        match self {
            Colour::Black => "Black",
            Colour::White => "White",
        }
    }

    /// Single-character token used by the text board
    pub fn symbol(self) -> char {
        match self {
            Colour::Black => 'X',
            Colour::White => 'O',
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_colour() {
        assert_eq!(Colour::Black.opposite(), Colour::White);
        assert_eq!(Colour::White.opposite(), Colour::Black);
    }

    #[test]
    fn test_colour_name() {
        assert_eq!(Colour::Black.name(), "Black");
        assert_eq!(Colour::White.to_string(), "White");
    }

    #[test]
    fn test_opposite_is_involution() {
        for colour in [Colour::Black, Colour::White] {
            assert_eq!(colour.opposite().opposite(), colour);
        }
    }
}
