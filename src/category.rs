// Category module: the fixed set of Sammy types the API accepts and the
// permissive resolver that maps free-form user input onto it.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Visual variant of a Sammy, selected server-side by its literal name.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SammyType {
    /// Baseline type, used whenever the input matches nothing else.
    #[default]
    Sammy,
    Punk,
    Dinosaur,
    Retro,
    Pizza,
    Robot,
    Pony,
    Bootcamp,
    Xray,
}

impl SammyType {
    /// All types in the order the API documents them.
    pub const ALL: [SammyType; 9] = [
        SammyType::Sammy,
        SammyType::Punk,
        SammyType::Dinosaur,
        SammyType::Retro,
        SammyType::Pizza,
        SammyType::Robot,
        SammyType::Pony,
        SammyType::Bootcamp,
        SammyType::Xray,
    ];

    /// Map user input onto a type, ignoring letter case. Anything that is
    /// not a known name resolves to `SammyType::Sammy`.
    pub fn resolve(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "punk" => SammyType::Punk,
            "dinosaur" => SammyType::Dinosaur,
            "retro" => SammyType::Retro,
            "pizza" => SammyType::Pizza,
            "robot" => SammyType::Robot,
            "pony" => SammyType::Pony,
            "bootcamp" => SammyType::Bootcamp,
            "xray" => SammyType::Xray,
            "sammy" => SammyType::Sammy,
            other => {
                log::warn!("Unknown Sammy type {other:?}, falling back to \"sammy\"");
                SammyType::Sammy
            }
        }
    }

    /// The literal sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SammyType::Sammy => "sammy",
            SammyType::Punk => "punk",
            SammyType::Dinosaur => "dinosaur",
            SammyType::Retro => "retro",
            SammyType::Pizza => "pizza",
            SammyType::Robot => "robot",
            SammyType::Pony => "pony",
            SammyType::Bootcamp => "bootcamp",
            SammyType::Xray => "xray",
        }
    }
}

impl fmt::Display for SammyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing never fails, see `SammyType::resolve`.
impl FromStr for SammyType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SammyType::resolve(s))
    }
}
