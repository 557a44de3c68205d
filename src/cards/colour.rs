#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Colour {
    #[default]
    Blue = 0,
    Green = 1,
    Red = 2,
    White = 3,
    Yellow = 4,
}

impl Colour {
    pub const fn all() -> [Self; 5] {
        [
            Self::Blue,
            Self::Green,
            Self::Red,
            Self::White,
            Self::Yellow,
        ]
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// u8 isomorphism
impl From<u8> for Colour {
    fn from(n: u8) -> Colour {
        match n {
            0 => Colour::Blue,
            1 => Colour::Green,
            2 => Colour::Red,
            3 => Colour::White,
            4 => Colour::Yellow,
            _ => panic!("invalid colour u8: {}", n),
        }
    }
}
impl From<Colour> for u8 {
    fn from(c: Colour) -> u8 {
        c as u8
    }
}

/// usize isomorphism, for indexing per-colour arrays
impl From<usize> for Colour {
    fn from(n: usize) -> Colour {
        Colour::from(n as u8)
    }
}

impl TryFrom<char> for Colour {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'B' => Ok(Colour::Blue),
            'G' => Ok(Colour::Green),
            'R' => Ok(Colour::Red),
            'W' => Ok(Colour::White),
            'Y' => Ok(Colour::Yellow),
            _ => Err(anyhow::anyhow!("invalid colour character: {}", c)),
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Colour::Blue => "B",
                Colour::Green => "G",
                Colour::Red => "R",
                Colour::White => "W",
                Colour::Yellow => "Y",
            }
        )
    }
}
