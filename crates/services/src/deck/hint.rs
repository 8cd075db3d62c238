/// Open/closed state of the hint overlay plus the text it shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintState {
    text: String,
    visible: bool,
}

impl HintState {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.visible = true;
    }

    /// Hides the overlay. The last text is kept so a closing animation can still render it.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
