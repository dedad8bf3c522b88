//! Dog record. No counter, just identity and two behaviors.

use serde::Serialize;

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dog {
    name: String,
    age: u32,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn sit(&self) -> String {
        format!("{} is sitting now", self.name)
    }

    pub fn roll_over(&self) -> String {
        format!("{} rolled over", self.name)
    }
}

impl Record for Dog {
    fn kind(&self) -> &'static str {
        "dog"
    }

    fn describe(&self) -> Vec<String> {
        vec![format!(
            "This dog's name is {} and it is {} years old.",
            self.name, self.age
        )]
    }

    fn greeting(&self) -> String {
        self.sit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_behaviors() {
        let dog = Dog::new("Buddy", 3);
        assert_eq!(dog.sit(), "Buddy is sitting now");
        assert_eq!(dog.roll_over(), "Buddy rolled over");
        assert_eq!(dog.greeting(), dog.sit());
    }

    #[test]
    fn test_describe() {
        let dog = Dog::new("Lucy", 5);
        assert_eq!(
            dog.summary(),
            "This dog's name is Lucy and it is 5 years old."
        );
    }
}
