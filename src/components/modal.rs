/// Where a click inside an open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    CloseButton,
    Content,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal {
    pub title: Option<String>,
    open: bool,
}

impl Modal {
    pub fn new(title: Option<String>) -> Self {
        Self { title, open: false }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(Some(title.into()))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Clicks on the backdrop or the close control dismiss the modal, clicks
    /// on its content do not. Returns whether it closed.
    pub fn click(&mut self, target: ModalClick) -> bool {
        if !self.open {
            return false;
        }
        match target {
            ModalClick::Backdrop | ModalClick::CloseButton => {
                self.open = false;
                true
            }
            ModalClick::Content => false,
        }
    }

    /// Header line: the title (if any) and the `×` close control.
    pub fn header(&self) -> String {
        match &self.title {
            Some(title) => format!("{}  ×", title),
            None => "×".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_clicks_keep_it_open() {
        let mut modal = Modal::titled("Create Workspace");
        modal.open();
        assert!(!modal.click(ModalClick::Content));
        assert!(modal.is_open());
        assert!(modal.click(ModalClick::Backdrop));
        assert!(!modal.is_open());

        modal.open();
        assert!(modal.click(ModalClick::CloseButton));
        assert!(!modal.click(ModalClick::CloseButton));
    }

    #[test]
    fn header_without_title() {
        assert_eq!(Modal::new(None).header(), "×");
        assert_eq!(Modal::titled("Edit Workspace").header(), "Edit Workspace  ×");
    }
}
