use serde::{Deserialize, Serialize};

/// A fill or stroke colour
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colour {
    /// DeviceRGB colour; r, g, b range from 0.0 to 1.0
    Rgb { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 (black) to 1.0 (white)
    Grey { g: f32 },
}

impl Colour {
    /// The content stream operator that selects this colour for filling text
    pub(crate) fn fill_operator(&self) -> String {
        match *self {
            Colour::Rgb { r, g, b } => format!("{r} {g} {b} rg"),
            Colour::Grey { g } => format!("{g} g"),
        }
    }

    /// The content stream operator that selects this colour for stroking rules
    pub(crate) fn stroke_operator(&self) -> String {
        match *self {
            Colour::Rgb { r, g, b } => format!("{r} {g} {b} RG"),
            Colour::Grey { g } => format!("{g} G"),
        }
    }
}

/// The palette a résumé is printed with: black text and three greys
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const DARK_GREY: Colour = Colour::Grey { g: 0.3 };
    pub const MEDIUM_GREY: Colour = Colour::Grey { g: 0.5 };
    pub const LIGHT_GREY: Colour = Colour::Grey { g: 0.8 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators() {
        assert_eq!(colours::MEDIUM_GREY.fill_operator(), "0.5 g");
        assert_eq!(colours::LIGHT_GREY.stroke_operator(), "0.8 G");
        assert_eq!(Colour::Rgb { r: 1.0, g: 0.0, b: 0.5 }.fill_operator(), "1 0 0.5 rg");
    }

    #[test]
    fn deserializes_from_config() {
        let colour: Colour = serde_json::from_str(r#"{"grey": {"g": 0.25}}"#).unwrap();
        assert_eq!(colour, Colour::Grey { g: 0.25 });
    }
}
