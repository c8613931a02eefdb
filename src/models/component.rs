use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
}

/// A front-end component, named by the identifier it is exported under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    name: String,
}

impl Component {
    /// Validate a component name; it must be usable as a JavaScript identifier
    pub fn new(name: &str) -> Result<Self> {
        if !IDENTIFIER.is_match(name) {
            return Err(Error::Config(format!(
                "'{}' is not a valid component name",
                name
            )));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<name>.<ext>`, e.g. `Verse.tsx`
    pub fn source_file(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }

    /// `<name>.<styleext>`, e.g. `Verse.module.css`
    pub fn style_file(&self, style_extension: &str) -> String {
        format!("{}.{}", self.name, style_extension)
    }

    /// Extension-less relative module reference, e.g. `./Verse`
    pub fn module_reference(&self) -> String {
        format!("./{}", self.name)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
