//! Pet record with a defaulted type.

use serde::Serialize;

use super::Record;

/// Pet type used when none is given.
pub const DEFAULT_PET_TYPE: &str = "dog";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    name: String,
    pet_type: String,
}

impl Pet {
    /// A pet of the default type.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_type(name, DEFAULT_PET_TYPE)
    }

    pub fn with_type(name: impl Into<String>, pet_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pet_type: pet_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pet_type(&self) -> &str {
        &self.pet_type
    }
}

impl Record for Pet {
    fn kind(&self) -> &'static str {
        "pet"
    }

    fn describe(&self) -> Vec<String> {
        vec![
            format!("Name: {}", self.name),
            format!("Type: {}", self.pet_type),
        ]
    }

    /// "I have a cat. My cat's name is Gili." with the name title-cased.
    fn greeting(&self) -> String {
        format!(
            "I have a {kind}. My {kind}'s name is {name}.",
            kind = self.pet_type,
            name = title_case(&self.name)
        )
    }
}

/// Uppercase the first letter of each word and lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut start_of_word = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if start_of_word {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            start_of_word = false;
        } else {
            out.push(c);
            start_of_word = true;
        }
    }
    out
}
