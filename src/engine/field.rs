use tracing::{debug, error, warn};

use crate::config::FieldConfig;
use crate::domain::{KeyType, KeyTypeConfig};
use crate::engine::binding::{KeyInput, TypeSelector};
use crate::engine::canonical::canonical_form;
use crate::engine::masker::apply_mask;
use crate::engine::registry;
use crate::engine::validator::{
    validate_cnpj, validate_cpf, validate_email, validate_mobile, validate_random,
};
use crate::error::{PixError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// A binding was missing at init; every operation is refused.
    Uninitialized,
    Ready,
}

fn validate_as(kind: KeyType, value: &str) -> bool {
    match kind {
        KeyType::Cpf => validate_cpf(value),
        KeyType::Cnpj => validate_cnpj(value),
        KeyType::Celular => validate_mobile(value),
        KeyType::Email => validate_email(value),
        KeyType::Aleatoria => validate_random(value),
    }
}

/// State of one key input field: the selected type, the typed value and its
/// masked rendering, kept in sync with the bound controls.
#[derive(Debug)]
pub struct KeyField<S, I> {
    selector: Option<S>,
    input: Option<I>,
    state: FieldState,
    selected: KeyType,
    raw: String,
    display: String,
    valid: bool,
    validator_attached: bool,
    country_code: String,
}

impl<S: TypeSelector, I: KeyInput> KeyField<S, I> {
    /// Create an uninitialized field. `None` stands for a control that could not be found.
    pub fn new(selector: Option<S>, input: Option<I>, config: &FieldConfig) -> Self {
        Self {
            selector,
            input,
            state: FieldState::Uninitialized,
            selected: config.default_type,
            raw: String::new(),
            display: String::new(),
            valid: false,
            validator_attached: false,
            country_code: config.country_code.clone(),
        }
    }

    /// Bring the field to `Ready` and configure the input for the selected type.
    ///
    /// An unknown selector value is logged and the configured default type is kept.
    pub fn init(&mut self) -> Result<()> {
        let type_id = match (&self.selector, &self.input) {
            (Some(selector), Some(_)) => selector.selected(),
            (None, _) => {
                error!("key field not initialized: type selector not found");
                return Err(PixError::MissingBinding("type selector"));
            }
            (_, None) => {
                error!("key field not initialized: key input not found");
                return Err(PixError::MissingBinding("key input"));
            }
        };

        self.state = FieldState::Ready;
        let config = registry::lookup(&type_id).unwrap_or_else(|| {
            warn!(type_id = %type_id, default = %self.selected, "invalid key type, keeping default");
            registry::config_for(self.selected)
        });
        self.apply_type(config);
        Ok(())
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.state == FieldState::Ready {
            Ok(())
        } else {
            error!("operation on uninitialized key field");
            Err(PixError::FieldInert)
        }
    }

    fn apply_type(&mut self, config: &KeyTypeConfig) {
        self.selected = config.kind;
        self.raw.clear();
        self.display.clear();
        self.valid = false;

        if let Some(input) = self.input.as_mut() {
            input.set_help(config.help);
            input.set_placeholder(config.placeholder);
            input.set_value("");
            input.set_error(false);
        }
        debug!(kind = %config.kind, "key type applied");
    }

    /// Switch to the type identified by `type_id`, clearing the current value.
    ///
    /// Unknown ids leave the field untouched.
    pub fn change_type(&mut self, type_id: &str) -> Result<KeyType> {
        self.ensure_ready()?;
        let Some(config) = registry::lookup(type_id) else {
            error!(type_id = %type_id, "invalid key type");
            return Err(PixError::UnknownKeyType(type_id.trim().to_string()));
        };
        self.apply_type(config);
        Ok(config.kind)
    }

    pub fn select(&mut self, kind: KeyType) -> Result<()> {
        self.ensure_ready()?;
        self.apply_type(registry::config_for(kind));
        Ok(())
    }

    /// React to a change of the bound selector.
    pub fn selection_event(&mut self) -> Result<KeyType> {
        self.ensure_ready()?;
        let type_id = self
            .selector
            .as_ref()
            .map(TypeSelector::selected)
            .ok_or(PixError::FieldInert)?;
        self.change_type(&type_id)
    }

    /// Store `text` as typed, re-mask it into the input and re-validate.
    ///
    /// Returns whether the value is valid for the selected type. The error
    /// marker is only touched once the validator has been attached.
    pub fn edit(&mut self, text: &str) -> Result<bool> {
        self.ensure_ready()?;
        text.clone_into(&mut self.raw);
        self.display = apply_mask(&self.raw, self.selected);
        self.valid = validate_as(self.selected, &self.raw);

        if let Some(input) = self.input.as_mut() {
            input.set_value(&self.display);
            if self.validator_attached {
                input.set_error(!self.valid);
            }
        }
        debug!(kind = %self.selected, valid = self.valid, "key value edited");
        Ok(self.valid)
    }

    /// React to a keystroke in the bound input.
    pub fn input_event(&mut self) -> Result<bool> {
        self.ensure_ready()?;
        let text = self
            .input
            .as_ref()
            .map(KeyInput::value)
            .ok_or(PixError::FieldInert)?;
        self.edit(&text)
    }

    /// Enable error marking on every edit. Returns `false` when already attached
    /// or when the field is not ready.
    pub fn attach_validator(&mut self) -> bool {
        if self.state != FieldState::Ready || self.validator_attached {
            return false;
        }
        self.validator_attached = true;
        true
    }

    /// Key in the form sent to the payload encoder.
    pub fn canonical(&self) -> Result<String> {
        self.ensure_ready()?;
        Ok(canonical_form(self.selected, &self.display, &self.country_code))
    }

    /// Trimmed value as the user typed it.
    pub fn raw(&self) -> Result<String> {
        self.ensure_ready()?;
        Ok(self.raw.trim().to_string())
    }

    #[must_use]
    pub fn state(&self) -> FieldState {
        self.state
    }

    #[must_use]
    pub fn selected(&self) -> KeyType {
        self.selected
    }

    #[must_use]
    pub fn config(&self) -> &'static KeyTypeConfig {
        registry::config_for(self.selected)
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn is_validator_attached(&self) -> bool {
        self.validator_attached
    }

    pub fn input(&self) -> Option<&I> {
        self.input.as_ref()
    }

    pub fn input_mut(&mut self) -> Option<&mut I> {
        self.input.as_mut()
    }

    pub fn selector_mut(&mut self) -> Option<&mut S> {
        self.selector.as_mut()
    }
}
