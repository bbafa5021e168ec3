/// Control the user picks the key type with.
pub trait TypeSelector {
    /// Currently selected type id, e.g. `"CPF"`.
    fn selected(&self) -> String;
}

/// Text control holding the key value.
pub trait KeyInput {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn set_placeholder(&mut self, placeholder: &str);
    /// `None` removes the helper text.
    fn set_help(&mut self, help: Option<&str>);
    /// Show or clear the error marker.
    fn set_error(&mut self, visible: bool);
}

/// In-memory selector, used by the CLI and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Select {
    pub value: String,
}

impl Select {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl TypeSelector for Select {
    fn selected(&self) -> String {
        self.value.clone()
    }
}

/// In-memory text input, used by the CLI and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub placeholder: String,
    pub help: Option<String>,
    pub error: bool,
}

impl KeyInput for TextInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
    }

    fn set_placeholder(&mut self, placeholder: &str) {
        placeholder.clone_into(&mut self.placeholder);
    }

    fn set_help(&mut self, help: Option<&str>) {
        self.help = help.map(str::to_string);
    }

    fn set_error(&mut self, visible: bool) {
        self.error = visible;
    }
}
