use std::{fmt, str::FromStr};

/// The `(ordinal, capacity)` pair identifying one registry in the chain of registries
/// backing a credential definition. Rendered as `<ordinal>-<capacity>` on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevocationRegistryTag {
    pub ordinal: u32,
    pub capacity: u32,
}

impl RevocationRegistryTag {
    pub const fn first(capacity: u32) -> Self {
        Self {
            ordinal: 1,
            capacity,
        }
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            ordinal: self.ordinal + 1,
            capacity: self.capacity,
        }
    }

    /// Successor of an arbitrary ledger tag. Tags which do not carry an ordinal restart
    /// the chain at 1.
    pub fn next_after(raw: &str, capacity: u32) -> Self {
        match raw.parse::<Self>() {
            Ok(tag) => Self {
                ordinal: tag.ordinal + 1,
                capacity,
            },
            Err(_) => Self::first(capacity),
        }
    }
}

impl fmt::Display for RevocationRegistryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.ordinal, self.capacity)
    }
}

impl FromStr for RevocationRegistryTag {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ordinal, capacity) = s
            .split_once('-')
            .ok_or_else(|| err_msg!(ConversionError, "Registry tag {s} is not <ordinal>-<capacity>"))?;
        let ordinal = ordinal
            .parse::<u32>()
            .map_err(|_| err_msg!(ConversionError, "Registry tag {s} has no numeric ordinal"))?;
        let capacity = capacity
            .parse::<u32>()
            .map_err(|_| err_msg!(ConversionError, "Registry tag {s} has no numeric capacity"))?;
        Ok(Self { ordinal, capacity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_render_and_parse() {
        let tag = RevocationRegistryTag::first(100);
        assert_eq!(tag.to_string(), "1-100");
        assert_eq!("1-100".parse::<RevocationRegistryTag>().unwrap(), tag);
        assert_eq!(tag.next().to_string(), "2-100");
    }

    #[test]
    fn test_tag_next_after() {
        assert_eq!(RevocationRegistryTag::next_after("4-10", 10).to_string(), "5-10");
        assert_eq!(RevocationRegistryTag::next_after("tag1", 10).to_string(), "1-10");
        assert_eq!(RevocationRegistryTag::next_after("x-10", 10).to_string(), "1-10");
    }

    #[test]
    fn test_tag_parse_rejects_malformed() {
        assert!("100".parse::<RevocationRegistryTag>().is_err());
        assert!("a-b".parse::<RevocationRegistryTag>().is_err());
    }
}
