use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Character groups a width conversion is allowed to touch.
    ///
    /// The bit values are part of the C ABI (`convert_target` arguments).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConvertTarget: u32 {
        const NUMBER = 1 << 0;
        const SYMBOL = 1 << 1;
        const ALPHABET = 1 << 2;
        const KATAKANA = 1 << 3;
        const ALL = Self::NUMBER.bits()
            | Self::SYMBOL.bits()
            | Self::ALPHABET.bits()
            | Self::KATAKANA.bits();
    }
}

impl Default for ConvertTarget {
    fn default() -> Self {
        Self::ALL
    }
}

const GROUP_NAMES: [(&str, ConvertTarget); 4] = [
    ("number", ConvertTarget::NUMBER),
    ("symbol", ConvertTarget::SYMBOL),
    ("alphabet", ConvertTarget::ALPHABET),
    ("katakana", ConvertTarget::KATAKANA),
];

impl ConvertTarget {
    /// Names of the groups set in `self`, in bit order.
    pub fn names(self) -> Vec<&'static str> {
        GROUP_NAMES
            .iter()
            .filter(|(_, t)| self.contains(*t))
            .map(|(n, _)| *n)
            .collect()
    }

    /// Parse one lowercase group name as used in settings and on the command line.
    pub fn from_group_name(name: &str) -> Option<Self> {
        match name {
            "number" => Some(Self::NUMBER),
            "symbol" => Some(Self::SYMBOL),
            "alphabet" => Some(Self::ALPHABET),
            "katakana" | "kana" => Some(Self::KATAKANA),
            "all" => Some(Self::ALL),
            _ => None,
        }
    }

    /// Union of a list of group names. `Err` carries the first unknown name.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, String> {
        names.iter().try_fold(Self::empty(), |acc, n| {
            Self::from_group_name(n.as_ref())
                .map(|t| acc | t)
                .ok_or_else(|| n.as_ref().to_string())
        })
    }
}

impl fmt::Display for ConvertTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ALL {
            f.write_str("all")
        } else {
            f.write_str(&self.names().join(","))
        }
    }
}
