/// The Base58 could not be decoded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// The input contained a character outside of the
    /// alphabet.
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of `character` in the input.
        index: usize,
    },
}

impl DecodeError {
    /// Returns the character that could not be decoded.
    pub const fn character(&self) -> char {
        match self {
            Self::InvalidCharacter { character, .. } => *character,
        }
    }

    /// Returns the byte offset of the character that could not
    /// be decoded.
    ///
    /// Every character before it is ASCII, so this is also its
    /// character offset.
    pub const fn index(&self) -> usize {
        match self {
            Self::InvalidCharacter { index, .. } => *index,
        }
    }
}

#[cfg(test)]
mod test {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_display() {
        let err = DecodeError::InvalidCharacter {
            character: '0',
            index: 3,
        };
        assert_eq!(err.to_string(), "invalid base58 character '0' at index 3");
        assert_eq!(err.character(), '0');
        assert_eq!(err.index(), 3);
    }
}
