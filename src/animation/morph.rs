/// Direction of travel between the text (source) layout and the effect (target) layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphMode {
    /// Particles start on the effect layout and travel back into the text.
    #[default]
    Assemble,
    /// Particles start where they are and travel out to the effect layout.
    Disperse,
}

impl MorphMode {
    /// Parse `"assemble"` / `"disperse"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "assemble" => Some(Self::Assemble),
            "disperse" => Some(Self::Disperse),
            _ => None,
        }
    }
}
