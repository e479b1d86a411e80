use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

/// 按钮视图模型
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub button_type: ButtonType,
    pub disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            button_type: ButtonType::default(),
            disabled: false,
        }
    }

    pub fn submit(label: impl Into<String>) -> Self {
        Self::new(label).button_type(ButtonType::Submit)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.variant {
            ButtonVariant::Primary => "",
            ButtonVariant::Secondary => "~",
            ButtonVariant::Danger => "!",
        };
        if self.disabled {
            write!(f, "({}{})", marker, self.label)
        } else {
            write!(f, "[{}{}]", marker, self.label)
        }
    }
}
